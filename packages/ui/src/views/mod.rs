mod account;
pub use account::{PasswordReset, SignUp};

mod dashboard;
pub use dashboard::{DashHome, Meals, Orders, Sales, Tables, Users};

mod sign_in;
pub use sign_in::SignIn;

mod storefront;
pub use storefront::{Cart, Categories, Contact, Home, NotFound, OrderSuccess};
