use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::dashboards::d400_home_summary::ui::dashboard::HomeDashboard;
use crate::domain::a001_sales::ui::list::SalesList;
use crate::domain::a002_stitching::ui::list::StitchingList;
use crate::domain::a003_billing::ui::list::BillingList;
use crate::layout::navbar::Navbar;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;

pub use crate::system::auth::guard::LOGIN_PATH;
pub const HOME_PATH: &str = "/home";
pub const SALES_PATH: &str = "/sales";
pub const STITCHING_PATH: &str = "/stitching";
pub const BILLING_PATH: &str = "/billing";

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Navbar />
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path=HOME_PATH /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=HOME_PATH /> } />
                    <Route path=path!("/login") view=LoginPage />
                    <Route
                        path=path!("/home")
                        view=|| view! { <RequireAuth><HomeDashboard /></RequireAuth> }
                    />
                    <Route
                        path=path!("/sales")
                        view=|| view! { <RequireAuth><SalesList /></RequireAuth> }
                    />
                    <Route
                        path=path!("/stitching")
                        view=|| view! { <RequireAuth><StitchingList /></RequireAuth> }
                    />
                    <Route
                        path=path!("/billing")
                        view=|| view! { <RequireAuth><BillingList /></RequireAuth> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
