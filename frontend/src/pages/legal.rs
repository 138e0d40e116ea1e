use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

const LEGAL_STYLE: &str = r#"
    .legal-content {
        min-height: 100vh;
        background: #000;
        padding: 6rem 2rem 4rem;
        color: #fff;
        display: flex;
        flex-direction: column;
        align-items: center;
    }
    .legal-content > div {
        background: rgba(30, 30, 30, 0.7);
        border: 1px solid rgba(139, 92, 246, 0.15);
        border-radius: 16px;
        padding: 3rem;
        max-width: 800px;
        width: 100%;
    }
    .legal-content h1 {
        font-size: 2rem;
        background: linear-gradient(45deg, #6366F1, #8B5CF6);
        -webkit-background-clip: text;
        -webkit-text-fill-color: transparent;
        margin-bottom: 0.5rem;
    }
    .legal-content h2 {
        color: #A78BFA;
        font-size: 1.2rem;
        margin: 2rem 0 0.75rem;
    }
    .legal-content p, .legal-content li {
        color: #999;
        line-height: 1.6;
    }
    .legal-back {
        display: inline-block;
        margin-bottom: 2rem;
        padding: 0.5rem 1.5rem;
        border-radius: 999px;
        background: #7C3AED;
        color: #fff;
        text-decoration: none;
    }
"#;

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: AttrValue,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <div class="legal-content">
            <style>{ LEGAL_STYLE }</style>
            <div>
                <Link<Route> to={Route::Home} classes="legal-back">{"← Back to Home"}</Link<Route>>
                <h1>{ props.title.clone() }</h1>
                <p>{"Effective Date: June 25, 2025"}</p>
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <p>{"Your privacy is important to us. This Privacy Policy explains how Taggle collects, uses, and protects your information."}</p>
            <section>
                <h2>{"1. Information We Collect"}</h2>
                <p>{"Email address when you join the waitlist."}</p>
            </section>
            <section>
                <h2>{"2. How We Use Your Information"}</h2>
                <p>{"We use your email to:"}</p>
                <ul>
                    <li>{"Share product updates and launch information"}</li>
                    <li>{"Understand demand for our product"}</li>
                    <li>{"Improve outreach and communication"}</li>
                </ul>
            </section>
            <section>
                <h2>{"3. Data Storage"}</h2>
                <p>{"Emails are securely stored using Google Firebase Firestore. Access is restricted to authorized personnel only."}</p>
            </section>
            <section>
                <h2>{"4. Data Sharing"}</h2>
                <p>{"We do not sell, rent, or share your email address with any third party."}</p>
            </section>
            <section>
                <h2>{"5. Your Rights"}</h2>
                <p>{"You may:"}</p>
                <ul>
                    <li>{"Access or request deletion of your personal data"}</li>
                    <li>{"Unsubscribe at any time via email or unsubscribe links"}</li>
                </ul>
                <p>{"For data requests, contact taggle003@gmail.com."}</p>
            </section>
            <section>
                <h2>{"6. Updates to This Policy"}</h2>
                <p>{"We may update this policy. Changes will be reflected on this page with a revised effective date."}</p>
            </section>
        </LegalPage>
    }
}

#[function_component(TermsAndConditions)]
pub fn terms_and_conditions() -> Html {
    html! {
        <LegalPage title="Terms & Conditions">
            <p>{"Welcome to Taggle. By joining our waitlist, you agree to the following terms:"}</p>
            <section>
                <h2>{"1. Waitlist Purpose"}</h2>
                <p>{"Taggle's waitlist allows users to express early interest in our upcoming SaaS platform. Joining the waitlist does not guarantee early access, availability, or pricing."}</p>
            </section>
            <section>
                <h2>{"2. Communications"}</h2>
                <p>{"By submitting your email, you agree to receive updates from Taggle, including product announcements, launch notifications, and related updates. You may unsubscribe at any time."}</p>
            </section>
            <section>
                <h2>{"3. Intellectual Property"}</h2>
                <p>{"All content on this site, including the Taggle name, logo, and visual assets, is owned by Taggle and protected under applicable intellectual property laws."}</p>
            </section>
            <section>
                <h2>{"4. Limitation of Liability"}</h2>
                <p>{"Taggle is currently in its early access stage. We are not liable for any damages resulting from the use, access, or inability to access waitlist-related services."}</p>
            </section>
            <section>
                <h2>{"5. Changes to Terms"}</h2>
                <p>{"We may update these Terms & Conditions at any time. Continued use of the site after any changes constitutes acceptance of the updated terms."}</p>
            </section>
        </LegalPage>
    }
}
