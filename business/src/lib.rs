pub mod application {
    pub mod cart {
        pub mod add_item;
        pub mod clear_cart;
        pub mod get_cart;
        pub mod remove_item;
        pub mod update_quantity;
    }
    pub mod checkout {
        pub mod place_order;
    }
}

pub mod domain {
    pub mod errors;
    pub mod logger;
    pub mod buyer {
        pub mod model;
    }
    pub mod cart {
        pub mod errors;
        pub mod model;
        pub mod repository;
        pub mod store;
        pub mod use_cases {
            pub mod add_item;
            pub mod clear_cart;
            pub mod get_cart;
            pub mod remove_item;
            pub mod update_quantity;
        }
    }
    pub mod checkout {
        pub mod errors;
        pub mod model;
        pub mod services;
        pub mod use_cases {
            pub mod place_order;
        }
    }
    pub mod product {
        pub mod model;
    }
    pub mod shared {
        pub mod value_objects;
    }
}
