pub mod application {
    pub mod category {
        pub mod get_all;
    }
    pub mod product {
        pub mod shared;
        pub mod create;
        pub mod delete;
        pub mod get_all;
        pub mod get_by_id;
        pub mod get_detail;
        pub mod toggle_pin;
        pub mod update;
    }
    #[cfg(test)]
    pub(crate) mod test_support;
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod category {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod use_cases {
            pub mod get_all;
        }
    }
    pub mod product {
        pub mod errors;
        pub mod form;
        pub mod image;
        pub mod listing;
        pub mod model;
        pub mod repository;
        pub mod services;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_all;
            pub mod get_by_id;
            pub mod get_detail;
            pub mod toggle_pin;
            pub mod update;
        }
    }
}
