use crate::{ContractFile, Generation};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitContract {
        generation: Generation,
        file: ContractFile,
    },
}
