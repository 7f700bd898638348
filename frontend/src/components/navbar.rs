use leptos::*;

use crate::api::Session;
use crate::components::button::{Button, ButtonVariant};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();

    let on_sign_out = move |_| {
        log::info!("signing out");
        session.sign_out();
    };

    view! {
        <nav class="navbar">
            <div class="container navbar-content">
                <a href="/dashboard/all-foods" class="navbar-brand">"FoodShare"</a>
                <div class="navbar-links">
                    <a href="/dashboard/all-foods">"All Foods"</a>
                    <a href="/dashboard/my-donations">"My Donations"</a>
                    {move || session.state().account().map(|account| {
                        let email = account.email.clone();
                        view! {
                            <span class="navbar-user">{email}</span>
                            <Button variant=ButtonVariant::Outline on_click=Callback::new(on_sign_out)>
                                "Sign out"
                            </Button>
                        }
                    })}
                </div>
            </div>
        </nav>
    }
}
