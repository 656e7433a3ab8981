//! Impact trends: cement production and CO2 emissions on the primary axis,
//! life years lost on the secondary one, 2020 through 2024.

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::components::loading::LoadingState;

const YEARS: [i32; 5] = [2020, 2021, 2022, 2023, 2024];
const CEMENT_PRODUCTION_MT: [f64; 5] = [4100.0, 4180.0, 4250.0, 4320.0, 4400.0];
const CO2_EMISSIONS_MT: [f64; 5] = [2870.0, 2920.0, 2975.0, 3025.0, 3080.0];
const LIFE_YEARS_LOST_M: [f64; 5] = [6.8, 7.0, 7.1, 7.3, 7.5];

const CEMENT_COLOR: RGBColor = RGBColor(0x1F, 0xB8, 0xCD);
const CO2_COLOR: RGBColor = RGBColor(0xB4, 0x41, 0x3C);
const LIFE_YEARS_COLOR: RGBColor = RGBColor(0xFF, 0xC1, 0x85);

fn draw(backend: CanvasBackend) -> Result<(), Box<dyn std::error::Error>> {
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(
            "Global Cement Production and Health Impact (2020-2024)",
            ("sans-serif", 16),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .right_y_label_area_size(60)
        .build_cartesian_2d(2020..2025, 0f64..5000f64)?
        .set_secondary_coord(2020..2025, 6f64..8f64);

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_labels(YEARS.len())
        .x_desc("Year")
        .y_desc("Million Tons")
        .x_label_formatter(&|year: &i32| year.to_string())
        .draw()?;

    chart
        .configure_secondary_axes()
        .y_desc("Life Years Lost (Millions)")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            YEARS.iter().copied().zip(CEMENT_PRODUCTION_MT.iter().copied()),
            &CEMENT_COLOR,
        ))?
        .label("Cement Production (Million Tons)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &CEMENT_COLOR));

    chart
        .draw_series(LineSeries::new(
            YEARS.iter().copied().zip(CO2_EMISSIONS_MT.iter().copied()),
            &CO2_COLOR,
        ))?
        .label("CO2 Emissions (Million Tons)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &CO2_COLOR));

    chart
        .draw_secondary_series(LineSeries::new(
            YEARS.iter().copied().zip(LIFE_YEARS_LOST_M.iter().copied()),
            &LIFE_YEARS_COLOR,
        ))?
        .label("Life Years Lost (Millions)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &LIFE_YEARS_COLOR));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    Ok(())
}

#[function_component(ImpactChart)]
pub fn impact_chart() -> Html {
    let canvas_ref = use_node_ref();
    let drawn = use_state(|| false);

    {
        let canvas_ref = canvas_ref.clone();
        let drawn = drawn.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .unwrap()
                        .unwrap()
                        .dyn_into::<web_sys::CanvasRenderingContext2d>()
                        .unwrap();
                    context.clear_rect(0.0, 0.0, canvas.width() as f64, canvas.height() as f64);

                    canvas.set_width(600);
                    canvas.set_height(400);

                    if let Some(backend) = CanvasBackend::with_canvas_object(canvas) {
                        match draw(backend) {
                            Ok(()) => drawn.set(true),
                            Err(e) => log::warn!("impact chart failed to draw: {e}"),
                        }
                    }
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="chart-container">
            {
                if !*drawn {
                    html! { <LoadingState message="Loading chart..." /> }
                } else {
                    html! {}
                }
            }
            <canvas
                ref={canvas_ref}
                width="600"
                height="400"
                style="max-width: 100%;"
            />
        </div>
    }
}
