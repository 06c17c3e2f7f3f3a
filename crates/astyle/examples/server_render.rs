//! Server render demo
//!
//! Renders a small page on the "server", prints the head markup it would
//! ship, then rehydrates a second engine from the embedded identifiers and
//! shows that compiling the same styles again writes nothing.
//!
//! Run with: RUST_LOG=astyle_style=trace cargo run -p astyle --example server_render

use astyle::prelude::*;
use astyle::ssr::HYDRATION_SCRIPT_ID;
use tracing_subscriber::EnvFilter;

fn button() -> Declaration {
    style! {
        "padding" => "6px 12px",
        "borderWidth" => 1,
        "borderStyle" => "solid",
        "backgroundColor" => "#0b5fff",
        "color" => "white",
        ":hover" => { "backgroundColor" => "#0846c2" },
        ":disabled" => { "opacity" => 0.5 },
    }
}

fn page(styler: &mut Styler) -> astyle::Result<String> {
    let vars = ThemeVariables::new().with("radius", "4px");
    styler.inject_theme(":root", &vars)?;
    styler.inject_global("body { margin: 0; }")?;

    let pulse = styler.keyframes(
        &Keyframes::new()
            .with("from", style! { "opacity" => 1 })
            .with("to", style! { "opacity" => 0.6 }),
    )?;

    let sheet = styler.create([
        ("button", &button()),
        ("busy", &style! { "animationName" => pulse.as_str(), "animationDuration" => "1s" }),
    ])?;

    let busy = true;
    let class = cx([Some(&sheet["button"]), busy.then_some(&sheet["busy"])]);
    Ok(format!(r#"<button class="{class}">Save</button>"#))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let server = StylesheetServer::new(StylerOptions::new().with_standard_transforms());
    let rendered = server.render(page)?;

    println!("<!-- head -->\n{}", rendered.head()?);
    println!("<!-- body -->\n{}", rendered.body);

    // What a client would read back out of the script element.
    let ids_json = serde_json::to_string(&rendered.css.ids)?;
    println!("\n#{HYDRATION_SCRIPT_ID}: {} ids", rendered.css.ids.len());

    let mut client = Styler::synthetic(server.options().clone());
    client.rehydrate(&Capture::from_hydration_json(&ids_json)?);
    client.create([("button", &button())])?;

    let written = client.capture().contents.lines().count();
    println!("rules written after rehydration: {written}");

    Ok(())
}
