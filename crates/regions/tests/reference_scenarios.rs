use ndarray::{array, Array1, Array2};
use regions::{
    create_region, linspace, Annulus, Circle, Grid, Polygon, Rectangle, Region, RegionConfig,
    RegionError, Shape,
};

fn small_axes() -> (Array1<f64>, Array1<f64>) {
    (linspace(0.0, 2.0, 5), linspace(0.0, 2.0, 5))
}

fn distance_image(grid: &Grid, xc: f64, zc: f64) -> Array2<f64> {
    ndarray::Zip::from(grid.x())
        .and(grid.z())
        .map_collect(|&x, &z| ((x - xc).powi(2) + (z - zc).powi(2)).sqrt())
}

fn inner_block() -> Array2<bool> {
    array![
        [false, false, false, false, false],
        [false, true, true, true, false],
        [false, true, true, true, false],
        [false, true, true, true, false],
        [false, false, false, false, false],
    ]
}

fn assert_close(actual: &Array1<f64>, expected: &[f64]) {
    assert_eq!(actual.len(), expected.len(), "{actual:?} vs {expected:?}");
    for (a, e) in actual.iter().zip(expected) {
        assert!((a - e).abs() < 1e-12, "{actual:?} vs {expected:?}");
    }
}

#[test]
fn test_annulus_xor_boundary() {
    let annulus = Annulus::new(1.0, 1.0, 0.0, 0.5, "mm").expect("Valid annulus");
    let (x_axis, z_axis) = small_axes();

    let mask = annulus.create_mask(x_axis.view(), z_axis.view());
    let expected = array![
        [false, false, false, false, false],
        [false, false, true, false, false],
        [false, true, false, true, false],
        [false, false, true, false, false],
        [false, false, false, false, false],
    ];
    assert_eq!(mask, expected);

    let grid = Grid::from_axes(x_axis.view(), z_axis.view());
    let image = distance_image(&grid, 1.0, 1.0);
    let values = annulus
        .get_values_in_region(image.view(), x_axis.view(), z_axis.view())
        .expect("Image matches grid");
    assert_close(&values, &[0.5, 0.5, 0.5, 0.5]);
}

#[test]
fn test_circle_mask_and_values() {
    let circle = Circle::new(1.0, 1.0, 0.5, "mm").expect("Valid circle");
    let (x_axis, z_axis) = small_axes();

    let mask = circle.create_mask(x_axis.view(), z_axis.view());
    let expected = array![
        [false, false, false, false, false],
        [false, false, true, false, false],
        [false, true, true, true, false],
        [false, false, true, false, false],
        [false, false, false, false, false],
    ];
    assert_eq!(mask, expected);

    let grid = Grid::from_axes(x_axis.view(), z_axis.view());
    let image = distance_image(&grid, 1.0, 1.0);
    let values = circle
        .get_values_in_region(image.view(), x_axis.view(), z_axis.view())
        .expect("Image matches grid");
    assert_close(&values, &[0.5, 0.5, 0.0, 0.5, 0.5]);
}

#[test]
fn test_rectangle_mask_and_values() {
    let rectangle = Rectangle::new(1.0, 1.0, 1.5, 1.0, "mm").expect("Valid rectangle");
    let (x_axis, z_axis) = small_axes();

    assert_eq!(rectangle.create_mask(x_axis.view(), z_axis.view()), inner_block());

    let image = Array2::<f64>::ones((5, 5));
    let values = rectangle
        .get_values_in_region(image.view(), x_axis.view(), z_axis.view())
        .expect("Image matches grid");
    assert_close(&values, &[1.0; 9]);
}

#[test]
fn test_polygon_matches_rectangle() {
    let polygon = Polygon::new(vec![[0.4, 0.4], [1.6, 0.4], [1.6, 1.6], [0.4, 1.6]], "mm")
        .expect("Valid polygon");
    let (x_axis, z_axis) = small_axes();
    assert_eq!(polygon.create_mask(x_axis.view(), z_axis.view()), inner_block());
}

#[test]
fn test_square_equals_rectangle_on_any_grid() {
    let square = Rectangle::square(1.0, 1.0, 1.0, "mm").unwrap();
    let rectangle = Rectangle::new(1.0, 1.0, 1.0, 1.0, "mm").unwrap();
    for num in [2, 7, 16, 33] {
        let x_axis = linspace(-1.0, 3.0, num);
        let z_axis = linspace(0.0, 2.0, num + 3);
        assert_eq!(
            square.create_mask(x_axis.view(), z_axis.view()),
            rectangle.create_mask(x_axis.view(), z_axis.view())
        );
    }
}

#[test]
fn test_mask_shape_follows_axes() {
    let x_axis = linspace(0.0, 1.0, 7);
    let z_axis = linspace(0.0, 1.0, 3);
    let shapes: Vec<Shape> = vec![
        Shape::default(),
        Circle::new(0.5, 0.5, 0.2, "mm").unwrap().into(),
        Annulus::new(0.5, 0.5, 0.1, 0.3, "mm").unwrap().into(),
        Rectangle::new(0.5, 0.5, 0.2, 0.4, "mm").unwrap().into(),
        Polygon::new(vec![[0.0, 0.0], [1.0, 0.0], [0.5, 1.0]], "mm").unwrap().into(),
    ];
    for shape in &shapes {
        let mask = shape.create_mask(x_axis.view(), z_axis.view());
        assert_eq!(mask.dim(), (3, 7), "{}", shape.name());
        // Pure function of its inputs
        assert_eq!(mask, shape.create_mask(x_axis.view(), z_axis.view()));
    }
}

#[test]
fn test_grid_overload_matches_axes() {
    let circle = Circle::new(1.0, 1.0, 0.5, "mm").unwrap();
    let (x_axis, z_axis) = small_axes();
    let expanded = Grid::from_axes(x_axis.view(), z_axis.view());
    let grid = Grid::from_meshgrid(expanded.x().clone(), expanded.z().clone()).unwrap();

    assert_eq!(
        circle.create_mask_on(&grid),
        circle.create_mask(x_axis.view(), z_axis.view())
    );
}

#[test]
fn test_extraction_rejects_mismatched_image() {
    let circle = Circle::new(1.0, 1.0, 0.5, "mm").unwrap();
    let (x_axis, z_axis) = small_axes();
    let image = Array2::<f64>::zeros((4, 5));

    let err = circle
        .get_values_in_region(image.view(), x_axis.view(), z_axis.view())
        .unwrap_err();
    assert!(matches!(
        err,
        RegionError::ShapeMismatch { expected: (5, 5), actual: (4, 5) }
    ));
}

#[test]
fn test_factory_round_trip() {
    let config = RegionConfig::from_json(
        r#"{ "type": "circle", "xc": 1, "zc": 1, "radius": 0.5, "units": "mm" }"#,
    )
    .expect("Should parse");
    let region = create_region(&config).expect("Should build");
    assert_eq!(region, Shape::Circle(Circle::new(1.0, 1.0, 0.5, "mm").unwrap()));

    assert!(matches!(
        RegionConfig::from_json(r#"{ "type": "unknown" }"#),
        Err(RegionError::UnknownType(_))
    ));
}
