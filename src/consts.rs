pub mod cli_consts {
    //! Dashboard Configuration Constants
    //!
    //! This module contains the fixed timings and sizes used by the dashboard
    //! engine, organized by functional area.

    // =============================================================================
    // ACTIVITY LOG
    // =============================================================================

    /// The maximum number of events to keep in the activity logs.
    pub const MAX_ACTIVITY_LOGS: usize = 100;

    // =============================================================================
    // NOTIFICATIONS
    // =============================================================================

    /// Notification timing configuration
    pub mod notifications {
        use std::time::Duration;

        /// How long a notification stays on screen before it starts leaving (milliseconds)
        pub const TTL_MS: u64 = 5_000;

        /// Duration of the slide-in and slide-out transitions (milliseconds)
        pub const TRANSITION_MS: u64 = 300;

        /// Helper function to get the notification lifetime
        pub const fn ttl() -> Duration {
            Duration::from_millis(TTL_MS)
        }

        /// Helper function to get the transition duration
        pub const fn transition() -> Duration {
            Duration::from_millis(TRANSITION_MS)
        }
    }

    // =============================================================================
    // SALES CHART
    // =============================================================================

    /// Sales chart configuration
    pub mod chart {
        use std::time::Duration;

        /// Height of the tallest bar, in pixels
        pub const MAX_BAR_HEIGHT_PX: f64 = 150.0;

        /// Number of bar slots available on the chart
        pub const BAR_SLOTS: usize = 12;

        /// Duration of the bar grow animation (milliseconds)
        pub const ANIMATION_MS: u64 = 500;

        /// Helper function to get the bar animation duration
        pub const fn animation() -> Duration {
            Duration::from_millis(ANIMATION_MS)
        }
    }

    // =============================================================================
    // QUICK ACTIONS
    // =============================================================================

    /// Quick action configuration
    pub mod quick_actions {
        use std::time::Duration;

        /// Simulated time to prepare a data export (milliseconds)
        pub const EXPORT_DELAY_MS: u64 = 1_500;

        /// Helper function to get the export delay
        pub const fn export_delay() -> Duration {
            Duration::from_millis(EXPORT_DELAY_MS)
        }
    }

    // =============================================================================
    // STORAGE
    // =============================================================================

    /// Key under which the edit-listing form draft is saved
    pub const DRAFT_STORAGE_KEY: &str = "retroMarket_listingDraft";

    /// Directory (under the home directory) holding config and drafts
    pub const APP_DIR_NAME: &str = ".seller-dashboard";
}
