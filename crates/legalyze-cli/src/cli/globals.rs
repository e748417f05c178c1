/// Options shared by every subcommand
#[derive(Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Overrides the configured API base URL
    pub api_url: Option<String>,
    /// Keep the session in memory only, nothing is persisted
    pub ephemeral: bool,
    /// Print raw JSON instead of tables
    pub json: bool,
}
