//! Public marketing page.

use leptos::prelude::*;
use portal::guard::{ADMIN_LOGIN_PATH, LOGIN_PATH};
use portal::{AuthState, Role};

pub const ACCOUNT_PATH: &str = "/account";

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

struct Programme {
    title: &'static str,
    summary: &'static str,
    duration: &'static str,
}

const PROGRAMMES: &[Programme] = &[
    Programme {
        title: "Full Stack Development",
        summary: "Front-end, back-end and deployment, built around real projects.",
        duration: "6 months",
    },
    Programme {
        title: "Data Science & Analytics",
        summary: "Python, statistics, SQL and dashboards for business decisions.",
        duration: "5 months",
    },
    Programme {
        title: "Digital Marketing",
        summary: "SEO, paid campaigns, content strategy and analytics.",
        duration: "3 months",
    },
];

const FEATURES: &[(&str, &str)] = &[
    ("Industry mentors", "Learn from practitioners who review your work every week."),
    ("Placement support", "Mock interviews, resume reviews and a curated job board."),
    ("Verified certificates", "Every completed programme earns a numbered certificate."),
];

const TESTIMONIALS: &[(&str, &str)] = &[
    ("Priya S.", "The assignments felt like real work. I joined a product team two months after finishing."),
    ("Arjun M.", "Mentor feedback was the difference. I finally understood how to structure a project."),
];

/// Header link for the visitor: their dashboard once signed in, sign-in otherwise.
pub fn account_link(state: &AuthState) -> (&'static str, &'static str) {
    match state.role() {
        None => ("Sign in", LOGIN_PATH),
        Some(Role::Unrecognized(_)) => ("My account", ACCOUNT_PATH),
        Some(role) => ("My dashboard", role.landing_path()),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let link = move || auth.with(account_link);

    view! {
        <div class="home">
            <header class="home__nav">
                <span class="home__brand">"Acadvizen"</span>
                <nav>
                    <a href="#programmes">"Programmes"</a>
                    <a href="#contact">"Contact"</a>
                    <a class="btn btn--primary" href=move || link().1>
                        {move || link().0}
                    </a>
                </nav>
            </header>

            <section class="home__hero">
                <h1>"Career-ready skills, taught by people who use them"</h1>
                <p>"Live classes, hands-on assignments and placement support in one place."</p>
                <a class="btn btn--primary" href="#contact">"Talk to an advisor"</a>
            </section>

            <section class="home__programmes" id="programmes">
                <h2>"Programmes"</h2>
                <div class="home__grid">
                    {PROGRAMMES
                        .iter()
                        .map(|p| {
                            view! {
                                <article class="home__card">
                                    <h3>{p.title}</h3>
                                    <p>{p.summary}</p>
                                    <span class="home__duration">{p.duration}</span>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="home__features">
                {FEATURES
                    .iter()
                    .map(|(title, body)| view! { <div class="home__feature"><h3>{*title}</h3><p>{*body}</p></div> })
                    .collect::<Vec<_>>()}
            </section>

            <section class="home__testimonials">
                <h2>"What learners say"</h2>
                {TESTIMONIALS
                    .iter()
                    .map(|(name, quote)| {
                        view! {
                            <blockquote>
                                <p>{*quote}</p>
                                <cite>{*name}</cite>
                            </blockquote>
                        }
                    })
                    .collect::<Vec<_>>()}
            </section>

            <section class="home__contact" id="contact">
                <h2>"Start your journey"</h2>
                <p>"Write to admissions@acadvizen.com and an advisor will call you back within a day."</p>
            </section>

            <footer class="home__footer">
                <a href=ADMIN_LOGIN_PATH>"Staff sign-in"</a>
            </footer>
        </div>
    }
}
