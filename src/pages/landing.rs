use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::early_access::EarlyAccessForm;
use crate::components::impact_chart::ImpactChart;
use crate::components::materials_chart::{MaterialsChart, MATERIALS};
use crate::components::stat_counter::StatCounter;
use crate::effects::ScrollEffects;
use crate::nav::scroll_to_section;

/// Headline statistics. Counter targets are non-negative by contract; the
/// carbon-negative materials live in the chart dataset instead.
pub const STATS: [(f64, &str); 4] = [
    (4_400.0, "Million tons of cement produced in 2024"),
    (3_080.0, "Million tons of CO2 emitted making it"),
    (7_500_000.0, "Life years lost each year to cement pollution"),
    (82.0, "kg of CO2 per ton of geopolymer concrete"),
];

#[function_component(Landing)]
pub fn landing() -> Html {
    // Scroll to top on initial mount, then arm the page effects; the
    // handle tears everything down when the page unmounts.
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            let effects = ScrollEffects::mount();
            move || drop(effects)
        },
        (),
    );

    let cta_click = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to_section("early-access");
    });

    html! {
        <div class="landing-page">
            <header id="hero" class="hero">
                <div class="hero-visual">
                    <img src="/assets/concrete-skyline.png" alt="Concrete skyline at dusk" loading="lazy" />
                </div>
                <div class="hero-content">
                    <h1 class="hero-title">{"The Hidden Cost of Concrete"}</h1>
                    <p class="hero-subtitle">
                        {"Cement is the world's most used man-made material, and one of its \
                          largest climate and health burdens. See the numbers, then help change them."}
                    </p>
                    <div class="hero-cta-group">
                        <a href="#early-access" class="hero-cta" onclick={cta_click.clone()}>
                            {"Get Early Access"}
                        </a>
                        <a href="#impact" class="hero-secondary-link" onclick={
                            Callback::from(|e: MouseEvent| {
                                e.prevent_default();
                                scroll_to_section("impact");
                            })
                        }>
                            {"See the impact"}
                        </a>
                    </div>
                </div>
            </header>

            <section id="impact" class="impact-section">
                <div class="section-header">
                    <h2>{"A Problem Measured in Millions"}</h2>
                    <p>{"Production keeps climbing, and so does everything downstream of it."}</p>
                </div>
                <div class="stats-grid">
                    {
                        for STATS.iter().map(|(target, label)| html! {
                            <StatCounter target={*target} label={*label} />
                        })
                    }
                </div>
                <div class="chart-card">
                    <ImpactChart />
                </div>
            </section>

            <section id="materials" class="materials-section">
                <div class="section-header">
                    <h2>{"Not All Concrete Is Equal"}</h2>
                    <p>{"Per-ton emissions vary by a factor of five between mixes, and two \
                         of them take carbon back out of the air."}</p>
                </div>
                <div class="chart-card">
                    <MaterialsChart />
                </div>
                <div class="alternatives-grid">
                    {
                        for MATERIALS.iter().map(|material| {
                            let negative = material.emissions_kg_per_ton < 0.0;
                            html! {
                                <div class="alternative-card">
                                    <h3>{ material.label }</h3>
                                    <p class="alternative-value">
                                        { format!("{:.0} kg CO2 per ton", material.emissions_kg_per_ton) }
                                    </p>
                                    <span class={classes!("alternative-badge", negative.then(|| "carbon-negative"))}>
                                        { if negative { "Carbon negative" } else { "Carbon positive" } }
                                    </span>
                                </div>
                            }
                        })
                    }
                </div>
            </section>

            <section id="findings" class="findings-section">
                <div class="section-header">
                    <h2>{"What the Research Shows"}</h2>
                </div>
                <div class="findings-grid">
                    <div class="finding-card">
                        <h3>{"8% of global emissions"}</h3>
                        <p>{"Cement alone accounts for roughly eight percent of the CO2 \
                             humanity releases every year, more than aviation and shipping combined."}</p>
                    </div>
                    <div class="finding-card">
                        <h3>{"A quiet health crisis"}</h3>
                        <p>{"Kiln dust and particulates around production sites are linked to \
                             millions of lost life years annually, concentrated in communities \
                             closest to the plants."}</p>
                    </div>
                    <div class="finding-card">
                        <h3>{"Alternatives already work"}</h3>
                        <p>{"Fly-ash blends, geopolymers and carbon-capture mixes are in \
                             production today. The barrier is adoption, not chemistry."}</p>
                    </div>
                </div>
            </section>

            <section id="early-access" class="cta-section">
                <div class="cta-card">
                    <h2>{"Track the Impact With Us"}</h2>
                    <p>{"ImpactMeter turns supplier data into the numbers you just scrolled \
                         past. Join the early access list and measure your next build."}</p>
                    <EarlyAccessForm />
                </div>
            </section>

            <footer class="landing-footer">
                <p>{"ImpactMeter - measuring the true cost of construction."}</p>
            </footer>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_targets_are_non_negative() {
        // The animator's contract excludes negative targets; anything signed
        // belongs to the materials chart.
        for (target, label) in STATS {
            assert!(target >= 0.0, "counter {label:?} must be non-negative");
        }
    }

    #[test]
    fn stats_cover_every_format_branch() {
        assert!(STATS.iter().any(|(t, _)| *t >= 1_000_000.0));
        assert!(STATS.iter().any(|(t, _)| (1_000.0..1_000_000.0).contains(t)));
        assert!(STATS.iter().any(|(t, _)| *t < 1_000.0));
    }
}
