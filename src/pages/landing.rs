//! Public marketing page at `/`.

use leptos::prelude::*;

#[component]
fn FeatureCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="feature-card">
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
        </div>
    }
}

#[component]
fn StepCard(number: &'static str, title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="step-card">
            <span class="step-card__number">{number}</span>
            <h3 class="step-card__title">{title}</h3>
            <p class="step-card__description">{description}</p>
        </div>
    }
}

/// Landing page: nav, hero, how-it-works steps, feature grid, footer.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <nav class="landing-page__nav">
                <span class="landing-page__brand">"TechKatta"</span>
                <div class="landing-page__nav-actions">
                    <a href="/login" class="landing-page__nav-link">"Login"</a>
                    <a href="/register" class="btn btn--primary">"Get Started"</a>
                </div>
            </nav>

            <section class="landing-page__hero">
                <p class="landing-page__badge">"The #1 Platform for Engineering Students"</p>
                <h1 class="landing-page__headline">
                    "Connect. Collaborate. "
                    <span class="landing-page__headline-accent">"Build the Future."</span>
                </h1>
                <p class="landing-page__subhead">
                    "Don't code alone. Find your dream team, join hackathons, and get \
                     AI-powered recommendations to accelerate your engineering journey."
                </p>
                <a href="/register" class="btn btn--primary landing-page__cta">
                    "Join TechKatta"
                </a>
            </section>

            <section class="landing-page__steps">
                <h2>"How TechKatta Works"</h2>
                <p class="landing-page__steps-subhead">
                    "Three simple steps to supercharge your college experience."
                </p>
                <div class="landing-page__step-grid">
                    <StepCard
                        number="01"
                        title="Create Profile"
                        description="Import your GitHub & LinkedIn. Showcase your skills, projects, and interests to the community."
                    />
                    <StepCard
                        number="02"
                        title="Get Matched"
                        description="Our AI algorithm finds the perfect teammates and hackathons based on your skill level."
                    />
                    <StepCard
                        number="03"
                        title="Build & Win"
                        description="Collaborate in real-time, build amazing projects, and earn reputation points."
                    />
                </div>
            </section>

            <section class="landing-page__features">
                <FeatureCard
                    title="Tech Communities"
                    description="Join communities based on your interests - AI, Web Dev, Mobile, IoT, and more."
                />
                <FeatureCard
                    title="Find Teammates"
                    description="AI-powered matching to find the perfect teammates for your next hackathon."
                />
                <FeatureCard
                    title="Smart Recommendations"
                    description="Get personalized content, learning paths, and opportunities tailored to you."
                />
            </section>

            <footer class="landing-page__footer">
                <span class="landing-page__brand">"TechKatta"</span>
                <p class="landing-page__footnote">
                    "Built for engineers, by engineers."
                </p>
            </footer>
        </div>
    }
}
