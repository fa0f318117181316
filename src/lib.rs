pub mod shared {
    pub mod infrastructure {
        pub mod cart_storage;
        pub mod catalog;
        pub mod notifier;
    }
}

pub mod modules {
    pub mod cart {
        pub mod core {
            pub mod cart;
            pub mod decision;
            pub mod notification;
            pub mod product;
        }
        pub mod use_cases {
            pub mod add_product {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod remove_product {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
            pub mod update_product_amount {
                pub mod command;
                pub mod decide;
                pub mod handler;
            }
        }
        pub mod store;
        pub mod view {
            pub mod actions;
            pub mod cart_view;
            pub mod format;
        }
        pub mod adapters {
            pub mod inbound {
                pub mod graphql;
                pub mod http;
            }
        }
    }
}

pub mod shell;
