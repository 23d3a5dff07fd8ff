pub mod modules {
    pub mod vehicles {
        pub mod core {
            pub mod repository;
            pub mod vehicle;
        }
        pub mod use_cases {
            pub mod list_vehicles {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_vehicle {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_vehicle {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_vehicle {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_vehicle {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod seed_file;
                pub mod vehicle_store_in_memory;
            }
        }
    }
}

pub mod shell;
