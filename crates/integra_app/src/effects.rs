use integra_client::{
    AnalyzeSettings, ClientEvent, ClientHandle, ContractPayload, FailureKind, PayloadSource,
    SubmitError,
};
use integra_core::{ContractFile, Effect, FileSource, Msg};
use integra_logging::{integra_info, integra_warn};

/// Bridges core effects to the analysis client and client events back to
/// core messages.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: AnalyzeSettings) -> Self {
        Self {
            client: ClientHandle::new(settings),
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitContract { generation, file } => {
                    integra_info!("SubmitContract generation={} file={}", generation, file.name);
                    self.client.submit(generation, map_payload(file));
                }
            }
        }
    }

    /// Drains completed analyses into core messages. Called once per frame.
    pub fn poll(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.client.try_recv() {
            match event {
                ClientEvent::AnalysisCompleted { generation, result } => {
                    let result = match result {
                        Ok(report) => Ok(report.text),
                        Err(err) => {
                            integra_warn!(
                                "Analysis failed: {} ({}), generation={}",
                                err.kind,
                                err.message,
                                generation
                            );
                            Err(user_message(&err))
                        }
                    };
                    msgs.push(Msg::AnalysisDone { generation, result });
                }
            }
        }
        msgs
    }
}

fn map_payload(file: ContractFile) -> ContractPayload {
    ContractPayload {
        file_name: file.name,
        source: match file.source {
            FileSource::Path(path) => PayloadSource::Path(path),
            FileSource::Bytes(bytes) => PayloadSource::Bytes(bytes),
        },
    }
}

fn user_message(err: &SubmitError) -> String {
    match &err.kind {
        FailureKind::Backend => err.message.clone(),
        FailureKind::HttpStatus(code) => format!("Falha ao analisar o contrato (HTTP {code})."),
        FailureKind::Timeout => "Tempo esgotado ao analisar o contrato.".to_string(),
        FailureKind::TooLarge { max_bytes, .. } => {
            format!("Arquivo excede o limite de {} MB.", max_bytes / (1024 * 1024))
        }
        FailureKind::Io => "Não foi possível ler o arquivo selecionado.".to_string(),
        FailureKind::InvalidBaseUrl
        | FailureKind::Network
        | FailureKind::MalformedResponse => "Falha ao analisar o contrato.".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::user_message;
    use integra_client::{FailureKind, SubmitError};

    #[test]
    fn backend_message_is_shown_verbatim() {
        let err = SubmitError {
            kind: FailureKind::Backend,
            message: "Formato não suportado".to_string(),
        };
        assert_eq!(user_message(&err), "Formato não suportado");
    }

    #[test]
    fn http_failure_message_carries_the_status_code() {
        let err = SubmitError {
            kind: FailureKind::HttpStatus(502),
            message: "502 Bad Gateway".to_string(),
        };
        assert!(user_message(&err).contains("502"));
    }

    #[test]
    fn network_failure_gets_the_generic_message() {
        let err = SubmitError {
            kind: FailureKind::Network,
            message: "connection refused".to_string(),
        };
        assert_eq!(user_message(&err), "Falha ao analisar o contrato.");
    }
}
