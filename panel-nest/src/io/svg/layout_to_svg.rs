use svg::Document;
use svg::node::element::{Group, Text, Title};

use crate::entities::{Bin, NestInstance};
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::{ShapeElement, SvgDrawOptions};
use crate::packing::NestSolution;
use crate::packing::transform::{placed_geometry, resolve_transform};

/// Draws every bin of `solution`, in order of creation.
pub fn solution_to_svgs(
    solution: &NestSolution,
    instance: &NestInstance,
    options: SvgDrawOptions,
) -> Vec<Document> {
    solution
        .bins
        .iter()
        .map(|bin| bin_to_svg(bin, instance, options, &instance.name))
        .collect()
}

/// Draws the panel of `bin` with all shapes placed on it, moved into their packed rectangles.
/// The y-axis points up, as in the drawings the shapes were read from.
pub fn bin_to_svg(
    bin: &Bin,
    instance: &NestInstance,
    options: SvgDrawOptions,
    title: &str,
) -> Document {
    let panel = bin.panel();
    let vbox = panel.scale(1.10);

    let theme = &options.theme;

    let stroke_width =
        f64::min(vbox.width(), vbox.height()) * 0.001 * theme.stroke_width_multiplier;

    let label = {
        //print some information above the top left corner of the panel
        let font_size = f64::min(panel.width(), panel.height()) * 0.025;
        let label_content = format!(
            "panel: {} | width: {:.3} | height: {:.3} | shapes: {} | density: {:.3}% | {}",
            bin.index,
            panel.width(),
            panel.height(),
            bin.placements().len(),
            bin.density() * 100.0,
            title,
        );
        Text::new(label_content)
            .set("x", panel.x_min)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw panel
    let panel_group = Group::new()
        .set("id", format!("panel_{}", bin.index))
        .add(svg_util::data_to_path(
            svg_util::rect_data(&panel),
            &[
                ("fill", &*format!("{}", theme.panel_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "panel, index: {}, width: {:.3}, height: {:.3}",
            bin.index,
            panel.width(),
            panel.height()
        )));

    //draw packed bounding boxes
    let packed_group = match options.draw_packed_rects {
        false => None,
        true => {
            let group = bin.placements().iter().fold(
                Group::new().set("id", "packed_rects"),
                |group, (shape_id, packed)| {
                    group.add(
                        svg_util::data_to_path(
                            svg_util::rect_data(&packed.rect()),
                            &[
                                ("fill", &*format!("{}", theme.packed_rect_fill)),
                                ("fill-opacity", "0.6"),
                                (
                                    "stroke",
                                    &*format!(
                                        "{}",
                                        svg_util::change_brightness(theme.packed_rect_fill, 0.5)
                                    ),
                                ),
                                ("stroke-width", &*format!("{}", stroke_width)),
                            ],
                        )
                        .add(Title::new(format!(
                            "shape {shape_id}, packed: [x: {:.3}, y: {:.3}, w: {:.3}, h: {:.3}, rotated: {}]",
                            packed.x, packed.y, packed.width, packed.height, packed.rotated
                        ))),
                    )
                },
            );
            Some(group)
        }
    };

    //draw the shapes at their placed position
    let shapes_group = {
        let mut shapes_group = Group::new().set("id", "shapes");
        for (shape_id, packed) in bin.placements() {
            let shape = instance.shape(*shape_id);
            let geometry = placed_geometry(shape, packed);
            let title = Title::new(format!(
                "shape {shape_id} (source: {}, copy: {}, {}), transf: [{}]",
                shape.source_id(),
                shape.copy(),
                geometry.name(),
                resolve_transform(shape, packed)
            ));
            let params = [
                ("fill", "none"),
                ("stroke", &*format!("{}", theme.shape_stroke)),
                ("stroke-width", &*format!("{}", stroke_width)),
                ("stroke-linecap", "round"),
                ("stroke-linejoin", "round"),
            ];
            shapes_group = match svg_util::shape_to_svg(&geometry, &params) {
                ShapeElement::Circle(c) => shapes_group.add(c.add(title)),
                ShapeElement::Path(p) => shapes_group.add(p.add(title)),
            };
        }
        shapes_group
    };

    //draw the remaining free space
    let free_group = match options.draw_free_rects {
        false => None,
        true => {
            let group = bin.free_rects().iter().fold(
                Group::new().set("id", "free_rects"),
                |group, fr| {
                    group.add(svg_util::data_to_path(
                        svg_util::rect_data(fr),
                        &[
                            ("fill", "none"),
                            ("stroke", &*format!("{}", theme.free_rect_stroke)),
                            ("stroke-opacity", "0.75"),
                            ("stroke-width", &*format!("{}", stroke_width)),
                            ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                        ],
                    ))
                },
            );
            Some(group)
        }
    };

    //flip the y-axis, mapping y to (panel.y_max + panel.y_min - y)
    let flipped = [Some(panel_group), packed_group, Some(shapes_group), free_group]
        .into_iter()
        .flatten()
        .fold(
            Group::new().set(
                "transform",
                format!("matrix(1 0 0 -1 0 {})", panel.y_min + panel.y_max),
            ),
            |g, sub| g.add(sub),
        );

    let vbox_svg = (vbox.x_min, vbox.y_min, vbox.width(), vbox.height());

    Document::new()
        .set("viewBox", vbox_svg)
        .add(flipped)
        .add(label)
}
