pub mod application {
    pub mod product {
        pub mod create;
        pub mod delete;
        pub mod get_alerts;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_stats;
        mod input;
        pub mod update;
    }
}

pub mod domain {
    pub mod clock;
    pub mod errors;
    pub mod logger;
    pub mod product {
        pub mod errors;
        pub mod filter;
        pub mod freshness;
        pub mod model;
        pub mod repository;
        pub mod stats;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_alerts;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_stats;
            pub mod update;
        }
    }
}
