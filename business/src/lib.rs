pub mod application {
    pub mod recommendation {
        pub mod create;
        pub mod delete;
        pub mod get_by_id;
        pub mod like;
        pub mod list;
        pub mod update;

        #[cfg(test)]
        pub(crate) mod mocks;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod recommendation {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod value_objects;
        pub mod use_cases {
            pub mod create;
            pub mod delete;
            pub mod get_by_id;
            pub mod like;
            pub mod list;
            pub mod update;
        }
    }
}

#[cfg(any(test, feature = "testing"))]
pub mod testing {
    pub mod factories;
    pub mod in_memory_repository;
}
