use heritage_planner::{
    compute_itinerary, Accommodation, CrowdLevel, DayKind, Month, PlannerError, Site, Transport,
    TripRequest,
};

fn site(name: &str, city: &str, duration_days: i64, avg_cost_per_day: f64) -> Site {
    Site {
        name: name.to_string(),
        city: city.to_string(),
        description: format!("{} in {}", name, city),
        duration_days,
        avg_cost_per_day,
    }
}

fn request(source: &str, destination: &str, total_days: i64, sites: Vec<Site>) -> TripRequest {
    TripRequest {
        source_state: source.to_string(),
        destination_state: destination.to_string(),
        selected_sites: sites,
        month: Month::new("December", CrowdLevel::Medium),
        total_days,
        transport: Transport {
            name: "Bus".to_string(),
            cost_per_kilometer: 2.0,
        },
        accommodation: Accommodation {
            tier_name: "Budget".to_string(),
            cost_per_night: 1000.0,
        },
        average_temperature_c: None,
    }
}

#[test]
fn test_scenario_no_sites_same_state() {
    let result = compute_itinerary(&request("Delhi", "Delhi", 3, vec![])).unwrap();

    let kinds: Vec<DayKind> = result.schedule.iter().map(|d| d.kind).collect();
    assert_eq!(
        kinds,
        vec![DayKind::InitialTravel, DayKind::Leisure, DayKind::Leisure]
    );
    let costs: Vec<f64> = result.schedule.iter().map(|d| d.cost_for_day).collect();
    assert_eq!(costs, vec![800.0, 300.0, 300.0]);
    assert_eq!(result.schedule[0].activity_label, "Travel from Delhi to Delhi");
    assert_eq!(result.schedule[0].description, None);
    assert_eq!(result.estimated_distance_km, 100);
    assert_eq!(result.breakdown.sites, 0.0);
}

#[test]
fn test_scenario_single_site_interstate() {
    let taj = site("Taj Mahal", "Agra", 2, 500.0);
    let result = compute_itinerary(&request("Delhi", "Uttar Pradesh", 3, vec![taj])).unwrap();

    assert_eq!(result.schedule[0].kind, DayKind::Site);
    assert_eq!(result.schedule[0].activity_label, "Visit Taj Mahal at Agra");
    assert_eq!(
        result.schedule[0].description.as_deref(),
        Some("Taj Mahal in Agra")
    );
    assert_eq!(result.schedule[0].cost_for_day, 500.0);
    assert_eq!(result.schedule[1].kind, DayKind::Site);
    assert_eq!(result.schedule[1].cost_for_day, 500.0);
    assert_eq!(result.schedule[2].kind, DayKind::Leisure);
    assert_eq!(result.schedule[2].cost_for_day, 300.0);
    assert_eq!(result.breakdown.sites, 1000.0);
    assert_eq!(result.estimated_distance_km, 880);
    assert_eq!(result.breakdown.transport, 1760.0);
}

#[test]
fn test_scenario_sites_overflow_trip() {
    let first = site("Khajuraho", "Chhatarpur", 5, 700.0);
    let second = site("Sanchi Stupa", "Raisen", 5, 250.0);
    let result =
        compute_itinerary(&request("Delhi", "Madhya Pradesh", 4, vec![first, second])).unwrap();

    assert_eq!(result.schedule.len(), 4);
    assert!(result
        .schedule
        .iter()
        .all(|d| d.kind == DayKind::Site && d.activity_label == "Visit Khajuraho at Chhatarpur"));
    assert_eq!(result.breakdown.sites, 4.0 * 700.0);
    // every requested site still counts towards the distance estimate
    assert_eq!(result.estimated_distance_km, 800 + 2 * 80);
}

#[test]
fn test_scenario_flat_costs() {
    let with_sites = request(
        "Goa",
        "Karnataka",
        5,
        vec![site("Hampi", "Hosapete", 3, 900.0)],
    );
    let result = compute_itinerary(&with_sites).unwrap();
    assert_eq!(result.breakdown.accommodation, 5000.0);
    assert_eq!(result.breakdown.meals, 2500.0);
    assert_eq!(result.breakdown.miscellaneous, 1500.0);

    let without_sites = compute_itinerary(&request("", "Karnataka", 5, vec![])).unwrap();
    assert_eq!(without_sites.breakdown.accommodation, 5000.0);
    assert_eq!(without_sites.breakdown.meals, 2500.0);
    assert_eq!(without_sites.breakdown.miscellaneous, 1500.0);
}

#[test]
fn test_single_day_trip_with_site() {
    let result = compute_itinerary(&request(
        "Odisha",
        "Odisha",
        1,
        vec![site("Konark Sun Temple", "Konark", 1, 400.0)],
    ))
    .unwrap();
    assert_eq!(result.schedule.len(), 1);
    assert_eq!(result.schedule[0].kind, DayKind::Site);
    assert_eq!(result.estimated_distance_km, 180);
}

#[test]
fn test_validation_failures() {
    for days in [0, -1, -30] {
        let err = compute_itinerary(&request("A", "B", days, vec![])).unwrap_err();
        assert!(matches!(err, PlannerError::InvalidInput(_)), "{} days", days);
    }

    let err =
        compute_itinerary(&request("A", "B", 3, vec![site("Ellora", "Aurangabad", 0, 1.0)]))
            .unwrap_err();
    assert!(matches!(err, PlannerError::InvalidInput(_)));

    let mut negative_transport = request("A", "B", 3, vec![]);
    negative_transport.transport.cost_per_kilometer = -0.5;
    assert!(compute_itinerary(&negative_transport).is_err());

    let mut negative_stay = request("A", "B", 3, vec![]);
    negative_stay.accommodation.cost_per_night = -1.0;
    let err = compute_itinerary(&negative_stay).unwrap_err();
    assert_eq!(err.error_code(), "INVALID_INPUT");
}

#[test]
fn test_recommendations_in_order() {
    let mut trip = request("Delhi", "Rajasthan", 2, vec![]);
    trip.month = Month::new("October", CrowdLevel::High);
    trip.transport.name = "Flight".to_string();
    trip.average_temperature_c = Some(30.0);

    let result = compute_itinerary(&trip).unwrap();
    assert_eq!(
        result.recommendations,
        vec![
            "Book accommodations and tickets in advance as this is peak season",
            "Book flights at least 2-3 weeks in advance for better prices",
            "Carry travel insurance for unexpected emergencies",
            "Average temperature in Rajasthan in October: 30°C",
        ]
    );
    assert_eq!(result.average_temperature_c, Some(30.0));
}

fn site_mixes() -> Vec<Vec<Site>> {
    vec![
        vec![],
        vec![site("Red Fort", "Delhi", 1, 350.0)],
        vec![
            site("Ajanta", "Aurangabad", 2, 600.0),
            site("Ellora", "Aurangabad", 3, 550.5),
        ],
        vec![
            site("Meenakshi Temple", "Madurai", 4, 120.25),
            site("Shore Temple", "Mamallapuram", 1, 80.0),
            site("Brihadeeswarar", "Thanjavur", 2, 0.0),
        ],
        vec![site("Golden Temple", "Amritsar", 9, 1000.0)],
    ]
}

#[test]
fn test_properties_over_input_grid() {
    for sites in site_mixes() {
        let requested: i64 = sites.iter().map(|s| s.duration_days).sum();
        for total_days in 1..=10 {
            for (source, rate) in [("Punjab", 0.0), ("Kerala", 3.7), ("", 12.345)] {
                let mut trip = request(source, "Punjab", total_days, sites.clone());
                trip.transport.cost_per_kilometer = rate;

                let result = compute_itinerary(&trip).unwrap();

                // schedule completeness
                assert_eq!(result.schedule.len() as i64, total_days);
                assert_eq!(i64::from(result.total_duration), total_days);
                for (idx, day) in result.schedule.iter().enumerate() {
                    assert_eq!(day.day_index as usize, idx + 1);
                    assert!(day.cost_for_day >= 0.0);
                    assert_eq!(day.description.is_some(), day.kind == DayKind::Site);
                }

                // cost additivity
                let b = result.breakdown;
                assert_eq!(
                    result.total_cost,
                    b.accommodation + b.sites + b.transport + b.meals + b.miscellaneous
                );
                assert!(b.transport >= 0.0 && b.transport.fract() == 0.0);

                // site-day cap
                assert_eq!(
                    result.site_day_count() as i64,
                    total_days.min(requested)
                );
                let scheduled_site_cost: f64 = result
                    .schedule
                    .iter()
                    .filter(|d| d.kind == DayKind::Site)
                    .map(|d| d.cost_for_day)
                    .sum();
                assert_eq!(b.sites, scheduled_site_cost);

                // travel only ever on day one
                assert!(result
                    .schedule
                    .iter()
                    .skip(1)
                    .all(|d| d.kind != DayKind::InitialTravel));

                // determinism
                let again = compute_itinerary(&trip).unwrap();
                assert_eq!(again, result);
                assert_eq!(
                    serde_json::to_string(&again).unwrap(),
                    serde_json::to_string(&result).unwrap()
                );
            }
        }
    }
}
