use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod components {
    pub mod toast;
}
mod pages {
    pub mod landing;
    pub mod legal;
}
mod waitlist {
    pub mod controller;
    pub mod email;
    pub mod firestore;
    pub mod form;
    pub mod store;
}

use pages::{
    landing::{scroll_to_waitlist, Landing},
    legal::{PrivacyPolicy, TermsAndConditions},
};


#[derive(Clone, Debug, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/join")]
    Join,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
    #[not_found]
    #[at("/404")]
    NotFound,
}


fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        },
        Route::Join => {
            info!("Rendering Home page at the waitlist form");
            html! { <Landing focus_waitlist={true} /> }
        },
        Route::Terms => {
            info!("Rendering Terms page");
            html! { <TermsAndConditions /> }
        },
        Route::Privacy => {
            info!("Rendering Privacy page");
            html! { <PrivacyPolicy /> }
        },
        Route::NotFound => {
            info!("Unknown route, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}


#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);
    let navigator = use_navigator();

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(move |_| {
            let listener = web_sys::window().map(|window| {
                let target = window.clone();
                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = target.scroll_y().unwrap_or(0.0);
                    is_scrolled.set(scroll_top > 40.0);
                }) as Box<dyn FnMut()>);

                let _ = window.add_event_listener_with_callback(
                    "scroll",
                    scroll_callback.as_ref().unchecked_ref(),
                );
                (window, scroll_callback)
            });

            move || {
                if let Some((window, scroll_callback)) = listener {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            }
        }, ());
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let join_waitlist = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            // The form only lives on the landing page
            if !scroll_to_waitlist() {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Join);
                }
            }
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        width: 100%;
                        z-index: 100;
                        transition: background 0.3s ease;
                    }
                    .top-nav.scrolled {
                        background: rgba(0, 0, 0, 0.8);
                        backdrop-filter: blur(10px);
                    }
                    .nav-content {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 1rem 2rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        color: #fff;
                        font-weight: 700;
                        font-size: 1.4rem;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 1.5rem;
                    }
                    .nav-link {
                        color: rgba(255, 255, 255, 0.8);
                        text-decoration: none;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        flex-direction: column;
                        gap: 4px;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 22px;
                        height: 2px;
                        background: #fff;
                    }
                    @media (max-width: 768px) {
                        .burger-menu { display: flex; }
                        .nav-right { display: none; }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 100%;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: rgba(0, 0, 0, 0.95);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"Taggle"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <a href="/#features" class="nav-link" onclick={close_menu.clone()}>{"Features"}</a>
                    <a href="/#pricing" class="nav-link" onclick={close_menu.clone()}>{"Pricing"}</a>
                    <a href="/#testimonials" class="nav-link" onclick={close_menu}>{"Testimonials"}</a>
                    <button class="btn-primary" onclick={join_waitlist}>
                        {"Join Waitlist"}
                    </button>
                </div>
            </div>
        </nav>
    }
}


#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application, waitlist store at {}", config::get_firestore_url());
    yew::Renderer::<App>::new().render();
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_route_is_its_own_path() {
        assert_eq!(Route::Join.to_path(), "/join");
        assert_eq!(Route::recognize("/join"), Some(Route::Join));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::recognize("/pricing"), Some(Route::NotFound));
    }
}
