#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub yes: bool,
    pub save: bool,
    pub count: Option<usize>,
    pub output: Option<String>,
    pub length: Option<usize>,
    pub min: Option<usize>,
    pub max: Option<usize>,
    pub pattern: Option<String>,
    pub seed: Option<u64>,
}

