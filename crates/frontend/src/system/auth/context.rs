use leptos::prelude::*;

use super::session::Session;
use crate::shared::api_utils::auth_header_mode;

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = Session::restore(auth_header_mode());
    provide_context(session);

    children()
}

/// Hook to access the admin session
pub fn use_session() -> Session {
    use_context::<Session>().expect("AuthProvider not found in component tree")
}
