use std::sync::{mpsc, Arc};
use std::thread;

use crate::{Analyzer, AnalyzeSettings, ClientEvent, ContractPayload, Generation, HttpAnalyzer};

enum ClientCommand {
    Submit {
        generation: Generation,
        payload: ContractPayload,
    },
}

/// Runs analysis requests on a background Tokio runtime and reports
/// completions over a channel polled by the UI loop.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
}

impl ClientHandle {
    pub fn new(settings: AnalyzeSettings) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let analyzer = Arc::new(HttpAnalyzer::new(settings));

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let analyzer = analyzer.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(analyzer.as_ref(), command, event_tx).await;
                });
            }
        });

        Self { cmd_tx, event_rx }
    }

    pub fn submit(&self, generation: Generation, payload: ContractPayload) {
        let _ = self.cmd_tx.send(ClientCommand::Submit {
            generation,
            payload,
        });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }
}

async fn handle_command(
    analyzer: &dyn Analyzer,
    command: ClientCommand,
    event_tx: mpsc::Sender<ClientEvent>,
) {
    match command {
        ClientCommand::Submit {
            generation,
            payload,
        } => {
            let result = analyzer.analyze(payload).await;
            let _ = event_tx.send(ClientEvent::AnalysisCompleted { generation, result });
        }
    }
}
