use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::waitlist::form::WaitlistForm;
use crate::Route;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

static FEATURES: [Feature; 7] = [
    Feature {
        icon: "✅",
        title: "Verified Leads",
        description: "Receive laser-targeted leads, fully verified and aligned to your ideal customer profile (ICP), right in your inbox.",
    },
    Feature {
        icon: "🔍",
        title: "Prospect Intelligence",
        description: "Gain insight into each lead's buying signals, firmographics, and intent, all enriched automatically.",
    },
    Feature {
        icon: "⚙️",
        title: "Smart Automations",
        description: "Enable intelligent automation to save hours every week and nurture leads without manual intervention.",
    },
    Feature {
        icon: "🔗",
        title: "CRM Integrations",
        description: "Seamlessly integrate with Salesforce, HubSpot, and more. Handled separately to keep your pipeline fresh.",
    },
    Feature {
        icon: "🎯",
        title: "Precision Targeting",
        description: "Advanced AI algorithms ensure every lead matches your exact requirements and buying criteria.",
    },
    Feature {
        icon: "🛡️",
        title: "Data Compliance",
        description: "GDPR and CCPA compliant data collection ensures your outreach meets all regulatory requirements.",
    },
    Feature {
        icon: "⚡",
        title: "Instant Delivery",
        description: "Get qualified leads delivered to your inbox within minutes of identification and verification.",
    },
];

struct Plan {
    name: &'static str,
    price: &'static str,
    description: &'static str,
    highlights: &'static [&'static str],
    popular: bool,
}

static PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "29",
        description: "Perfect for small businesses starting with lead generation",
        highlights: &["100 verified leads per month", "Basic ICP targeting", "Email support"],
        popular: false,
    },
    Plan {
        name: "Professional",
        price: "59",
        description: "Ideal for growing teams with advanced lead generation needs",
        highlights: &[
            "500 verified leads per month",
            "Prospect intelligence",
            "CRM integrations",
            "Priority support",
        ],
        popular: true,
    },
    Plan {
        name: "Growth",
        price: "99",
        description: "For organizations requiring enterprise-grade features",
        highlights: &[
            "Unlimited verified leads",
            "Smart automations",
            "Dedicated account manager",
            "Custom integrations",
        ],
        popular: false,
    },
];

struct Testimonial {
    quote: &'static str,
    name: &'static str,
    role: &'static str,
    company: &'static str,
}

static TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        quote: "Taggle's automation features have revolutionized our lead nurturing process. We're seeing 60% better engagement rates.",
        name: "Sarah Chen",
        role: "Marketing Director",
        company: "Innovate Solutions",
    },
    Testimonial {
        quote: "The ROI on Taggle is incredible. We've cut our prospecting time in half while tripling our qualified pipeline.",
        name: "Marcus Webb",
        role: "Business Development",
        company: "Northwind Labs",
    },
    Testimonial {
        quote: "Every lead lines up with our ICP. Our reps finally spend their time talking to people who actually need us.",
        name: "Priya Patel",
        role: "Head of Sales",
        company: "Brightline",
    },
];

/// Smooth-scrolls to the waitlist form. Returns false when it is not on the page.
pub fn scroll_to_waitlist() -> bool {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id("waitlist-section"));
    match element {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Center);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        None => false,
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <header class="hero">
            <div class="hero-content">
                <h1>
                    {"You build it. "}
                    <span class="gradient-text">{"Now find who needs it."}</span>
                </h1>
                <p class="hero-subtitle">
                    {"Our AI-powered platform identifies and connects you with high-value leads that are most likely to convert into customers."}
                </p>
                <WaitlistForm />
            </div>
        </header>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section id="features" class="features">
            <h2>{"Leads That Convert"}</h2>
            <div class="feature-grid">
                { for FEATURES.iter().map(|feature| html! {
                    <div class="feature-card">
                        <span class="feature-icon">{ feature.icon }</span>
                        <h3>{ feature.title }</h3>
                        <p>{ feature.description }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    let onclick = Callback::from(|_: MouseEvent| {
        scroll_to_waitlist();
    });

    html! {
        <section id="pricing" class="pricing">
            <h2>{"Simple, transparent pricing"}</h2>
            <div class="pricing-grid">
                { for PLANS.iter().map(|plan| html! {
                    <div class={classes!("pricing-card", plan.popular.then(|| "popular"))}>
                        if plan.popular {
                            <span class="popular-badge">{"Most Popular"}</span>
                        }
                        <h3>{ plan.name }</h3>
                        <div class="price">
                            <span class="amount">{ format!("${}", plan.price) }</span>
                            <span class="period">{"/month"}</span>
                        </div>
                        <p>{ plan.description }</p>
                        <h4>{"Plan Highlights:"}</h4>
                        <ul>
                            { for plan.highlights.iter().map(|highlight| html! { <li>{ *highlight }</li> }) }
                        </ul>
                        <button class="btn-ghost" onclick={onclick.clone()}>{"Join Waitlist"}</button>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Testimonials)]
fn testimonials() -> Html {
    html! {
        <section id="testimonials" class="testimonials">
            <h2>{"Trusted by "}<span class="gradient-text">{"Industry Leaders"}</span></h2>
            <p class="section-subtitle">{"Join 500+ companies already using Taggle"}</p>
            <div class="testimonial-grid">
                { for TESTIMONIALS.iter().map(|testimonial| html! {
                    <figure class="testimonial-card">
                        <blockquote>{ format!("\"{}\"", testimonial.quote) }</blockquote>
                        <figcaption>
                            <strong>{ testimonial.name }</strong>
                            <span>{ format!("{}, {}", testimonial.role, testimonial.company) }</span>
                        </figcaption>
                    </figure>
                }) }
            </div>
        </section>
    }
}

#[function_component(CtaSection)]
fn cta_section() -> Html {
    html! {
        <section class="cta-section">
            <h2>{"Ready to find the customers who need you?"}</h2>
            <p>{"Be the first to know when Taggle launches."}</p>
            <button
                class="btn-primary"
                onclick={Callback::from(|_: MouseEvent| {
                    scroll_to_waitlist();
                })}
            >
                {"Join Waitlist"}
            </button>
        </section>
    }
}

#[function_component(Footer)]
fn footer() -> Html {
    html! {
        <footer class="footer">
            <div class="footer-brand">
                <span class="nav-logo">{"Taggle"}</span>
                <p>{"Revolutionizing B2B lead generation with AI-powered insights and automation."}</p>
                <p>{"San Francisco, CA 94103"}</p>
            </div>
            <div class="footer-links">
                <Link<Route> to={Route::Privacy} classes="footer-link">{"Privacy Policy"}</Link<Route>>
                <Link<Route> to={Route::Terms} classes="footer-link">{"Terms of Service"}</Link<Route>>
            </div>
            <p class="footer-copy">{"© 2025 Taggle. All rights reserved."}</p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    /// Land on the waitlist form instead of the top of the page.
    #[prop_or_default]
    pub focus_waitlist: bool,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    // Runs after the first render, so the form is already in the DOM
    use_effect_with_deps(
        move |focus_waitlist| {
            if !*focus_waitlist || !scroll_to_waitlist() {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            || ()
        },
        props.focus_waitlist,
    );

    html! {
        <div class="landing-page">
            <style>
                {r#"
                    .landing-page {
                        min-height: 100vh;
                        background: radial-gradient(circle at top, #1e1b4b 0%, #000 60%);
                        color: #fff;
                    }
                    .landing-page section, .hero {
                        max-width: 1100px;
                        margin: 0 auto;
                        padding: 6rem 2rem;
                    }
                    .hero { padding-top: 9rem; }
                    .hero h1 { font-size: 3.2rem; line-height: 1.15; margin-bottom: 1.5rem; }
                    .hero-subtitle { color: rgba(255, 255, 255, 0.7); font-size: 1.2rem; max-width: 36rem; margin-bottom: 2rem; }
                    .gradient-text {
                        background: linear-gradient(45deg, #6366F1, #8B5CF6);
                        -webkit-background-clip: text;
                        -webkit-text-fill-color: transparent;
                    }
                    .btn-primary, .btn-ghost {
                        padding: 0.9rem 1.6rem;
                        border-radius: 999px;
                        font-weight: 600;
                        cursor: pointer;
                    }
                    .btn-primary { background: linear-gradient(45deg, #6366F1, #8B5CF6); color: #fff; border: none; }
                    .btn-ghost { background: transparent; color: #fff; border: 1px solid rgba(255, 255, 255, 0.3); }
                    .feature-grid, .pricing-grid, .testimonial-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                        gap: 1.5rem;
                        margin-top: 2.5rem;
                    }
                    .feature-card, .pricing-card, .testimonial-card {
                        background: rgba(255, 255, 255, 0.04);
                        border: 1px solid rgba(139, 92, 246, 0.15);
                        border-radius: 16px;
                        padding: 2rem;
                        margin: 0;
                    }
                    .feature-icon { font-size: 1.8rem; }
                    .feature-card p, .pricing-card p, .section-subtitle, .testimonial-card span { color: rgba(255, 255, 255, 0.7); }
                    .pricing-card.popular { border-color: #8B5CF6; }
                    .popular-badge { color: #8B5CF6; font-size: 0.8rem; text-transform: uppercase; }
                    .amount { font-size: 2.5rem; font-weight: 700; color: #A78BFA; }
                    .testimonial-card figcaption { display: flex; flex-direction: column; margin-top: 1rem; }
                    .cta-section { text-align: center; }
                    .footer {
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 3rem 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        gap: 2rem;
                        color: rgba(255, 255, 255, 0.6);
                    }
                    .footer-links { display: flex; gap: 1.5rem; }
                    .footer-link { color: rgba(255, 255, 255, 0.8); text-decoration: none; }
                    @media (max-width: 768px) {
                        .hero h1 { font-size: 2.2rem; }
                    }
                "#}
            </style>
            <Hero />
            <main>
                <Features />
                <Pricing />
                <Testimonials />
            </main>
            <CtaSection />
            <Footer />
        </div>
    }
}
