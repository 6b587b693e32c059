//! Marketing landing page.
//!
//! All figures here are static display copy; nothing on this page talks to
//! the backend.

use leptos::prelude::*;

use crate::state::session::Session;

/// Landing page: hero, live-stats strip, features, and call to action.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <HomeNavbar/>

            <main>
                <section class="hero">
                    <h1>
                        "Smarter Cities start with " <span class="hero__accent">"Smart Waste Management"</span>
                    </h1>
                    <p class="hero__lead">
                        "Monitor fill levels in real-time, optimize collection routes, and \
                         reduce carbon footprint with our IoT-enabled waste sensors."
                    </p>
                    <div class="hero__actions">
                        <button class="btn btn--primary">"View Live Demo"</button>
                        <button class="btn btn--outline">"Contact Sales"</button>
                    </div>
                </section>

                <section class="stats-strip">
                    <StatCard title="Bins Monitored" value="1,248"/>
                    <StatCard title="Collection Eff." value="94%" trend="+5.2%"/>
                    <StatCard title="Active Trucks" value="18"/>
                    <StatCard title="Alerts" value="3" trend="Needs Action"/>
                </section>

                <section class="how-it-works">
                    <h2>"How It Works"</h2>
                    <p>"From sensor to dashboard: seamless data integration."</p>
                </section>

                <section class="features">
                    <h2>"Why Choose EcoBin IoT?"</h2>
                    <p class="features__lead">"Optimize your operations with data-driven decisions."</p>
                    <div class="features__grid">
                        <FeatureCard
                            title="Real-time Monitoring"
                            description="Ultrasonic sensors detect fill levels instantly, preventing \
                                         overflows and unsightly messes."
                        />
                        <FeatureCard
                            title="Dynamic Routing"
                            description="Our AI algorithms calculate the most efficient pickup routes \
                                         based on actual bin status, saving fuel."
                        />
                        <FeatureCard
                            title="Detailed Analytics"
                            description="Generate comprehensive reports on waste generation patterns \
                                         to improve city planning."
                        />
                    </div>
                </section>

                <section class="cta">
                    <h2>"Ready to optimize your waste management?"</h2>
                    <p>"Join over 50 municipalities utilizing our Smart Waste Solution."</p>
                    <button class="btn btn--inverse">"Schedule a Consultation"</button>
                </section>
            </main>

            <footer class="site-footer">
                <div>
                    <span class="site-footer__brand">"EcoBin IoT"</span>
                    <p>"© 2024 EcoBin Systems. All rights reserved."</p>
                </div>
                <div class="site-footer__links">
                    <a href="#">"Privacy Policy"</a>
                    <a href="#">"Terms of Service"</a>
                    <a href="#">"Support"</a>
                </div>
            </footer>
        </div>
    }
}

/// Top navigation with sign-in/sign-up links and a mobile menu toggle.
#[component]
fn HomeNavbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let menu_open = RwSignal::new(false);

    view! {
        <nav class="home-nav">
            <a href="/" class="home-nav__brand">
                "EcoBin IoT"
            </a>
            <div class="home-nav__links">
                <a href="#">"Fleet Map"</a>
                <Show
                    when=move || session.get().is_authenticated()
                    fallback=|| {
                        view! {
                            <a href="/signin">"Login"</a>
                            <a href="/signup" class="home-nav__signup">
                                "Sign up"
                            </a>
                        }
                    }
                >
                    <a href="/dashboard" class="home-nav__signup">
                        "Dashboard"
                    </a>
                </Show>
            </div>
            <button
                class="home-nav__menu-toggle"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                {move || if menu_open.get() { "Close" } else { "Menu" }}
            </button>
            <Show when=move || menu_open.get()>
                <div class="home-nav__drawer">
                    <a href="#">"Fleet Map"</a>
                    <a href="#">"Analytics"</a>
                    <a href="/signin">"Login"</a>
                    <a href="/signup">"Sign Up"</a>
                </div>
            </Show>
        </nav>
    }
}

/// Single landing-page stat tile.
#[component]
fn StatCard(
    title: &'static str,
    value: &'static str,
    #[prop(optional)] trend: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            {trend.map(|t| view! { <span class="stat-card__trend">{t}</span> })}
            <h3 class="stat-card__title">{title}</h3>
            <p class="stat-card__value">{value}</p>
        </div>
    }
}

/// Single feature blurb.
#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3>{title}</h3>
            <p>{description}</p>
        </div>
    }
}
