use crate::{ContractFile, Generation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User picked a file via the browse dialog.
    FilePicked(ContractFile),
    /// A dragged file entered the window.
    DragEntered,
    /// The dragged file left the window without dropping.
    DragLeft,
    /// A drop finished; `None` when the drop carried no usable file.
    FileDropped(Option<ContractFile>),
    /// The analysis request for `generation` settled. `Ok` carries the
    /// report text, `Err` a user-facing failure message.
    AnalysisDone {
        generation: Generation,
        result: Result<String, String>,
    },
    /// User clicked the reset button after a verdict.
    ResetClicked,
}
