use approx::assert_relative_eq;
use narwhal_axis::core::{
    DataExtent, DataPoint, PlotGeometry, ResolvedDomain, SeriesData, VerticalScale,
    nice_round_up,
};

#[test]
fn vertical_scale_maps_max_to_top_and_min_to_bottom() {
    let scale = VerticalScale::new(ResolvedDomain::new(3.0, 33.0), 300.0);

    assert_eq!(scale.value_to_pixel(33.0), 0.0);
    assert_eq!(scale.value_to_pixel(3.0), 300.0);
    assert_relative_eq!(scale.value_to_pixel(18.0), 150.0);
}

#[test]
fn vertical_scale_round_trip_within_tolerance() {
    let scale = VerticalScale::new(ResolvedDomain::new(-2.0, 500.0), 420.0);

    let px = scale.value_to_pixel(123.4);
    assert_relative_eq!(scale.pixel_to_value(px), 123.4, epsilon = 1e-9);
}

#[test]
fn collapsed_domain_maps_to_plot_bottom() {
    let scale = VerticalScale::new(ResolvedDomain::point(3.0), 300.0);

    assert_eq!(scale.value_to_pixel(3.0), 300.0);
    assert_eq!(scale.value_to_pixel(10.0), 300.0);
}

#[test]
fn invalid_plot_geometry_is_rejected() {
    let domain = ResolvedDomain::new(0.0, 1.0);

    assert!(VerticalScale::for_plot(domain, PlotGeometry::new(0.0, 0.0, 100.0, 0.0)).is_err());
    assert!(
        VerticalScale::for_plot(domain, PlotGeometry::new(f64::NAN, 0.0, 100.0, 50.0)).is_err()
    );
    assert!(VerticalScale::for_plot(domain, PlotGeometry::default()).is_ok());
}

#[test]
fn plot_geometry_converts_to_container_coordinates() {
    let plot = PlotGeometry::new(40.0, 12.0, 500.0, 200.0);

    assert_eq!(plot.absolute_y(0.0), 12.0);
    assert_eq!(plot.bottom(), 212.0);
}

#[test]
fn extent_merges_all_series() {
    let series = [
        SeriesData::from(vec![1.0, 2.0, 3.0, 4.0]),
        SeriesData::from(vec![DataPoint::new(0.0, -5.0), DataPoint::new(1.0, 6.0)]),
    ];
    let extent = DataExtent::from_series(&series).expect("extent");

    assert_eq!(extent, DataExtent::new(-5.0, 6.0));
}

#[test]
fn extent_of_empty_data_is_an_error() {
    let series = [SeriesData::from(Vec::<f64>::new())];

    assert!(DataExtent::from_series(&series).is_err());
    assert!(DataExtent::from_values(std::iter::empty()).is_err());
}

#[test]
fn nice_round_up_matches_reference_values() {
    assert_eq!(nice_round_up(30.0), 33.0);
    assert_eq!(nice_round_up(4.0), 5.0);
    assert_eq!(nice_round_up(50.0), 55.0);
    assert_eq!(nice_round_up(3.0), 4.0);
    assert_eq!(nice_round_up(0.0), 0.0);
}

#[test]
fn nice_round_up_keeps_fractional_magnitudes() {
    assert_eq!(nice_round_up(0.3), 0.4);
    assert_eq!(nice_round_up(0.05), 0.06);
    assert_eq!(nice_round_up(-0.5), -0.4);
}

#[test]
fn nice_round_up_passes_non_finite_values_through() {
    assert!(nice_round_up(f64::NAN).is_nan());
    assert_eq!(nice_round_up(f64::INFINITY), f64::INFINITY);
}
