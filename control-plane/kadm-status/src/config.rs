use envconfig::Envconfig;

#[derive(Envconfig, Clone, Debug)]
pub struct StatusConfig {
    /// Poll cadence for the external loop that re-derives cluster status.
    /// Env: KADM_STATUS_POLL_INTERVAL_SECS
    #[envconfig(from = "KADM_STATUS_POLL_INTERVAL_SECS", default = "10")]
    pub poll_interval_secs: u64,
}
