//! End-to-end checks of the SVG document produced by `encode_to_svg`.

use pretty_assertions::assert_eq;

use tqrcodegen::command::Interp;
use tqrcodegen::package::{Package, ENCODE_TO_SVG};
use tqrcodegen::{to_svg_string, Config, Ecc, Encoder, ModuleGrid, OriginModule, QrEncoder, RenderError, SvgOptions};

fn view_box_side(svg: &str) -> i32 {
    let start = svg.find("viewBox=\"0 0 ").unwrap() + "viewBox=\"0 0 ".len();
    let rest = &svg[start..];
    let end = rest.find('"').unwrap();
    let dims: Vec<i32> = rest[..end].split(' ').map(|n| n.parse().unwrap()).collect();
    assert_eq!(dims.len(), 2);
    assert_eq!(dims[0], dims[1], "viewBox must be square");
    dims[0]
}

fn path_commands(svg: &str) -> Vec<String> {
    let start = svg.find("<path d=\"").unwrap() + "<path d=\"".len();
    let end = start + svg[start..].find('"').unwrap();
    svg[start..end]
        .split(' ')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[test]
fn test_full_document_layout() {
    let grid = ModuleGrid::from_rows(&[[true, true], [false, true]]).unwrap();
    let svg = to_svg_string(&grid, 4).unwrap();

    let expected = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n\
<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" viewBox=\"0 0 10 10\" stroke=\"none\">\n\
\t<rect width=\"100%\" height=\"100%\" fill=\"#FFFFFF\"/>\n\
\t<path d=\"M5,4h1v1h-1z M5,5h1v1h-1z\" fill=\"#000000\"/>\n\
</svg>\n";
    assert_eq!(svg, expected);
}

#[test]
fn test_empty_grid_has_empty_path() {
    let grid = ModuleGrid::from_fn(3, |_, _| false).unwrap();
    let svg = to_svg_string(&grid, 1).unwrap();
    assert!(svg.contains("\t<path d=\"\" fill=\"#000000\"/>\n"));
    assert_eq!(view_box_side(&svg), 5);
}

#[test]
fn test_rendering_is_deterministic() {
    let grid = QrEncoder.encode("https://example.com", Ecc::Medium).unwrap();
    let first = to_svg_string(&grid, 4).unwrap();
    let second = to_svg_string(&grid, 4).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_view_box_matches_padded_size() {
    let grid = QrEncoder.encode("Hello, world!", Ecc::High).unwrap();
    for border in [0, 1, 4, 10] {
        let svg = to_svg_string(&grid, border).unwrap();
        assert_eq!(view_box_side(&svg), grid.size() + 2 * border);
    }
}

#[test]
fn test_one_command_per_dark_module_except_origin() {
    let grid = QrEncoder.encode("Hello, world!", Ecc::High).unwrap();
    // A QR code's top-left finder corner is always dark.
    assert!(grid.get_module(0, 0));

    let suppressed = to_svg_string(&grid, 4).unwrap();
    assert_eq!(path_commands(&suppressed).len(), grid.dark_count() - 1);
    assert!(!path_commands(&suppressed).contains(&"M4,4h1v1h-1z".to_string()));

    let options = SvgOptions { border: 4, origin_module: OriginModule::Emit };
    let emitted = tqrcodegen::svg::to_svg_string_with(&grid, &options).unwrap();
    let commands = path_commands(&emitted);
    assert_eq!(commands.len(), grid.dark_count());
    assert_eq!(commands[0], "M4,4h1v1h-1z");
}

#[test]
fn test_commands_follow_row_major_order() {
    let grid = QrEncoder.encode("order", Ecc::Low).unwrap();
    let svg = to_svg_string(&grid, 0).unwrap();
    let coords: Vec<(i32, i32)> = path_commands(&svg)
        .iter()
        .map(|c| {
            let body = c.strip_prefix('M').unwrap().strip_suffix("h1v1h-1z").unwrap();
            let (x, y) = body.split_once(',').unwrap();
            (y.parse().unwrap(), x.parse().unwrap())
        })
        .collect();
    let mut sorted = coords.clone();
    sorted.sort();
    assert_eq!(coords, sorted);
}

#[test]
fn test_invalid_borders_produce_no_output() {
    let grid = ModuleGrid::from_rows(&[[true]]).unwrap();
    for border in [-1, -100, i32::MIN, i32::MAX] {
        let err = to_svg_string(&grid, border).unwrap_err();
        assert!(matches!(err, RenderError::InvalidBorder { .. }), "border {}", border);
    }
}

#[test]
fn test_command_encodes_caller_text() {
    let package = Package::with_config(Config::default());
    let mut interp = Interp::new();
    package.init(&mut interp).unwrap();

    let hello = interp.eval(&[ENCODE_TO_SVG, "Hello, world!"]).unwrap();
    let other = interp.eval(&[ENCODE_TO_SVG, "something else entirely"]).unwrap();
    assert_ne!(hello, other);

    let direct = QrEncoder.encode("Hello, world!", Ecc::High).unwrap();
    assert_eq!(hello, to_svg_string(&direct, 4).unwrap());
}
