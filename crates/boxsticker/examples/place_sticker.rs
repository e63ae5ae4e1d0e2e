//! Place a sticker on one synthetic box and print the render data.
//!
//! Run: `cargo run -p boxsticker --example place_sticker`

use boxsticker::prelude::*;

fn main() {
    let (truth, points) = draw_rect_cloud(
        CloudCfg {
            jitter: 0.8,
            interior: 20,
            ..CloudCfg::default()
        },
        ReplayToken::new(2024, 0),
    );
    let geo = match process_object(&points, &MarkerSpec::default(), GeomCfg::default()) {
        Ok(geo) => geo,
        Err(err) => {
            eprintln!("no usable object: {err}");
            return;
        }
    };
    println!(
        "truth: center=({:.2}, {:.2}) size={:.2}x{:.2} angle={:.2}",
        truth.center.x, truth.center.y, truth.width, truth.height, truth.angle
    );
    println!(
        "fit:   center=({:.2}, {:.2}) size={:.2}x{:.2} angle={:.2}",
        geo.rect.center.x, geo.rect.center.y, geo.rect.width, geo.rect.height, geo.rect.angle
    );
    let (x, y) = geo.marker_pixel();
    println!("Orientation angle (deg): {}", geo.display_angle());
    println!("Sticker position (x, y): ({x}, {y})");
    for (i, c) in geo.marker_corners.iter().enumerate() {
        println!("  sticker corner {i}: ({:.2}, {:.2})", c.x, c.y);
    }
}
