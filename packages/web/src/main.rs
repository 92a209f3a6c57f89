use dioxus::prelude::*;

use ui::views::{Cart, Categories, Contact, Home, OrderSuccess, PasswordReset, SignIn, SignUp};
use ui::{CartProvider, SessionProvider};
use views::{
    AdminLayout, DashHomePage, MealsPage, OrdersPage, PageNotFound, SalesPage, TablesPage,
    UsersPage,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/cart")]
    Cart {},
    #[route("/categories")]
    Categories {},
    #[route("/contact")]
    Contact {},
    #[route("/signup")]
    SignUp {},
    #[route("/ordersuccess")]
    OrderSuccess {},
    #[route("/signin")]
    SignIn {},
    #[route("/passwordreset")]
    PasswordReset {},
    #[layout(AdminLayout)]
        #[route("/admin", DashHomePage)]
        Admin {},
        #[route("/meals", MealsPage)]
        Meals {},
        #[route("/orders", OrdersPage)]
        Orders {},
        #[route("/sales", SalesPage)]
        Sales {},
        #[route("/table", TablesPage)]
        Table {},
        #[route("/users", UsersPage)]
        Users {},
    #[end_layout]
    #[route("/:..segments", PageNotFound)]
    NotFound { segments: Vec<String> },
}

fn main() {
    dioxus::logger::init(tracing::Level::INFO).ok();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        SessionProvider {
            CartProvider {
                Router::<Route> {}
            }
        }
    }
}
