//! Route access table.
//!
//! The storefront pages are always reachable. The dashboard pages only exist for a
//! signed-in user; the web router mirrors this table with a guarded layout.

pub const HOME: &str = "/";
pub const CART: &str = "/cart";
pub const CATEGORIES: &str = "/categories";
pub const CONTACT: &str = "/contact";
pub const SIGN_UP: &str = "/signup";
pub const ORDER_SUCCESS: &str = "/ordersuccess";
pub const SIGN_IN: &str = "/signin";
pub const PASSWORD_RESET: &str = "/passwordreset";

pub const ADMIN: &str = "/admin";
pub const MEALS: &str = "/meals";
pub const ORDERS: &str = "/orders";
pub const SALES: &str = "/sales";
pub const TABLE: &str = "/table";
pub const USERS: &str = "/users";

pub const PUBLIC_PATHS: [&str; 8] = [
    HOME,
    CART,
    CATEGORIES,
    CONTACT,
    SIGN_UP,
    ORDER_SUCCESS,
    SIGN_IN,
    PASSWORD_RESET,
];

pub const ADMIN_PATHS: [&str; 6] = [ADMIN, MEALS, ORDERS, SALES, TABLE, USERS];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Admin,
}

/// Access level of a registered path; `None` for unknown paths.
pub fn access_for(path: &str) -> Option<RouteAccess> {
    let path = normalize(path);
    if PUBLIC_PATHS.contains(&path) {
        Some(RouteAccess::Public)
    } else if ADMIN_PATHS.contains(&path) {
        Some(RouteAccess::Admin)
    } else {
        None
    }
}

/// Whether `path` renders a page for a visitor in the given login state.
pub fn is_reachable(path: &str, logged_in: bool) -> bool {
    match access_for(path) {
        Some(RouteAccess::Public) => true,
        Some(RouteAccess::Admin) => logged_in,
        None => false,
    }
}

/// Strip query, fragment and trailing slash.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    match path.trim_end_matches('/') {
        "" => HOME,
        trimmed => trimmed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_public_routes_always_reachable() {
        for path in PUBLIC_PATHS {
            assert!(is_reachable(path, false), "{path}");
            assert!(is_reachable(path, true), "{path}");
        }
    }

    #[test]
    fn test_admin_routes_need_login() {
        for path in ADMIN_PATHS {
            assert_eq!(access_for(path), Some(RouteAccess::Admin));
            assert!(!is_reachable(path, false), "{path}");
            assert!(is_reachable(path, true), "{path}");
        }
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(access_for("/nope"), None);
        assert!(!is_reachable("/nope", true));
    }

    #[test]
    fn test_normalizes_paths() {
        assert_eq!(access_for(""), Some(RouteAccess::Public));
        assert_eq!(access_for("/admin/"), Some(RouteAccess::Admin));
        assert_eq!(access_for("/cart?step=2"), Some(RouteAccess::Public));
        assert_eq!(access_for("/orders#top"), Some(RouteAccess::Admin));
    }
}
