//! Materials comparison: horizontal bars of CO2 emissions per ton for six
//! construction materials. Carbon-negative materials extend left of the
//! emphasized zero line and are annotated as absorbing CO2.

use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

use crate::components::loading::LoadingState;

pub struct MaterialBar {
    pub label: &'static str,
    pub emissions_kg_per_ton: f64,
    pub color: RGBColor,
}

pub const MATERIALS: [MaterialBar; 6] = [
    MaterialBar {
        label: "Traditional Concrete",
        emissions_kg_per_ton: 410.0,
        color: RGBColor(0xB4, 0x41, 0x3C),
    },
    MaterialBar {
        label: "Green Concrete (30% fly ash)",
        emissions_kg_per_ton: 287.0,
        color: RGBColor(0xDB, 0x45, 0x45),
    },
    MaterialBar {
        label: "Recycled Aggregate Concrete",
        emissions_kg_per_ton: 360.0,
        color: RGBColor(0x96, 0x43, 0x25),
    },
    MaterialBar {
        label: "Geopolymer Concrete",
        emissions_kg_per_ton: 82.0,
        color: RGBColor(0x5D, 0x87, 0x8F),
    },
    MaterialBar {
        label: "Hempcrete",
        emissions_kg_per_ton: -110.0,
        color: RGBColor(0x05, 0x96, 0x69),
    },
    MaterialBar {
        label: "Carbon-Capture Concrete",
        emissions_kg_per_ton: -150.0,
        color: RGBColor(0x1F, 0xB8, 0xCD),
    },
];

/// Annotation mirroring the sign rule the source page showed in tooltips.
pub fn sign_annotation(emissions: f64) -> &'static str {
    if emissions < 0.0 {
        "absorbs CO2"
    } else {
        "emits CO2"
    }
}

fn row_of(index: usize) -> i32 {
    // First material on top: index 0 maps to the highest band.
    (MATERIALS.len() - 1 - index) as i32
}

fn draw(backend: CanvasBackend) -> Result<(), Box<dyn std::error::Error>> {
    let root = backend.into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .caption(
            "Environmental Impact: CO2 Emissions by Construction Material",
            ("sans-serif", 16),
        )
        .x_label_area_size(40)
        .y_label_area_size(170)
        .build_cartesian_2d(-250f64..500f64, 0..MATERIALS.len() as i32)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("CO2 Emissions (kg per ton)")
        .y_labels(MATERIALS.len())
        .y_label_formatter(&|row| {
            let index = MATERIALS.len() as i32 - 1 - *row;
            usize::try_from(index)
                .ok()
                .and_then(|i| MATERIALS.get(i))
                .map(|m| m.label.to_string())
                .unwrap_or_default()
        })
        .draw()?;

    chart.draw_series(MATERIALS.iter().enumerate().map(|(index, material)| {
        let row = row_of(index);
        Rectangle::new(
            [(0.0, row), (material.emissions_kg_per_ton, row + 1)],
            material.color.filled(),
        )
    }))?;

    // Emphasized zero line separating emitters from absorbers.
    chart.draw_series(std::iter::once(PathElement::new(
        vec![(0.0, 0), (0.0, MATERIALS.len() as i32)],
        BLACK.stroke_width(2),
    )))?;

    chart.draw_series(MATERIALS.iter().enumerate().map(|(index, material)| {
        let emissions = material.emissions_kg_per_ton;
        Text::new(
            format!("{emissions:.0} ({})", sign_annotation(emissions)),
            (emissions.max(0.0) + 10.0, row_of(index)),
            ("sans-serif", 12),
        )
    }))?;

    Ok(())
}

#[function_component(MaterialsChart)]
pub fn materials_chart() -> Html {
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
                            Err(e) => log::warn!("materials chart failed to draw: {e}"),
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_emissions_read_as_absorption() {
        assert_eq!(sign_annotation(-150.0), "absorbs CO2");
        assert_eq!(sign_annotation(-110.0), "absorbs CO2");
        assert_eq!(sign_annotation(0.0), "emits CO2");
        assert_eq!(sign_annotation(410.0), "emits CO2");
    }

    #[test]
    fn carbon_negative_bars_never_become_counters() {
        // Counters are defined only for non-negative stats; everything below
        // zero in this dataset stays chart data.
        let negatives: Vec<_> = MATERIALS
            .iter()
            .filter(|m| m.emissions_kg_per_ton < 0.0)
            .map(|m| m.label)
            .collect();
        assert_eq!(negatives, vec!["Hempcrete", "Carbon-Capture Concrete"]);
    }

    #[test]
    fn rows_render_top_down() {
        assert_eq!(row_of(0), 5);
        assert_eq!(row_of(MATERIALS.len() - 1), 0);
    }
}
