/// A schema definition handle.
///
/// `SchemaDef` carries no state: its contract is that it constructs with
/// no arguments and that `run` completes successfully.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchemaDef;

impl SchemaDef {
    pub fn new() -> SchemaDef {
        SchemaDef
    }

    /// Execute the definition. Always succeeds.
    pub fn run(&self) -> bool {
        tracing::trace!("SchemaDef::run invoked");
        true
    }
}
