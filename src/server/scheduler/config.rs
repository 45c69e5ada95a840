pub mod expiry {
    /// Cron expression for the entitlement expiry sweep
    /// Runs every hour at the top of the hour
    pub const CRON_EXPRESSION: &str = "0 0 * * * *";
}
