pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! Configuration constants for the polling dashboard, organized by
    //! functional area.

    /// Maximum number of buffered worker events awaiting the render loop.
    pub const EVENT_QUEUE_SIZE: usize = 100;

    /// User-facing message shown when a fetch cycle fails, regardless of cause.
    pub const FETCH_ERROR_MESSAGE: &str = "Failed to fetch data";

    /// Refresh scheduling configuration
    pub mod refresh {
        use std::time::Duration;

        /// Interval between fetch cycles (milliseconds)
        pub const INTERVAL_MS: u64 = 60_000;

        /// Helper function to get the refresh interval
        pub const fn interval() -> Duration {
            Duration::from_millis(INTERVAL_MS)
        }

        /// Helper function to get the refresh interval in whole seconds
        pub const fn interval_secs() -> u64 {
            INTERVAL_MS / 1000
        }
    }
}
