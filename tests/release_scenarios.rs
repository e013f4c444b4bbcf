use fermatean_bog::*;

fn ffs(mu: f64, nu: f64) -> FermateanFuzzySet {
    FermateanFuzzySet::new(mu, nu).unwrap()
}

fn same_for_all_criteria(mu: f64, nu: f64) -> Vec<FermateanFuzzySet> {
    vec![ffs(mu, nu); 5]
}

#[test]
fn prohibited_location_is_never_vented() {
    let rules = BogReleaseRules::new();

    for pressure in [0.0, 0.65, 0.8, 5.0] {
        let decision = rules
            .evaluate_release_conditions(pressure, &same_for_all_criteria(0.9, 0.1))
            .unwrap();

        assert_eq!(decision.assessment.level, RiskLevel::Prohibited);
        assert!(!decision.should_release);
        assert_eq!(decision.reason.as_str(), "Prohibited location or weather condition");
    }
}

#[test]
fn moderate_criteria_grade_as_warning() {
    // (1 + 0.3^3 - 0.6^3) / 2 = 0.4055
    let decision = BogReleaseRules::new()
        .evaluate_release_conditions(0.75, &same_for_all_criteria(0.3, 0.6))
        .unwrap();

    assert!((decision.assessment.score - 0.4055).abs() < 1e-9);
    assert_eq!(decision.assessment.level, RiskLevel::Warning);
    assert!(decision.should_release);
    assert_eq!(decision.reason.as_str(), "Warning location");
}

#[test]
fn safe_location_vents_above_safe_pressure() {
    let rules = BogReleaseRules::new();
    let criteria = same_for_all_criteria(0.2, 0.8);

    let decision = rules.evaluate_release_conditions(0.75, &criteria).unwrap();
    assert_eq!(decision.assessment.level, RiskLevel::Safe);
    assert_eq!((decision.should_release, decision.reason.as_str()), (true, "Safe location"));

    let decision = rules.evaluate_release_conditions(0.45, &criteria).unwrap();
    assert_eq!(
        (decision.should_release, decision.reason.as_str()),
        (false, "Pressure below safe threshold")
    );
}

#[test]
fn high_risk_needs_high_pressure() {
    let rules = BogReleaseRules::new();
    let criteria = same_for_all_criteria(0.8, 0.3);

    let low = rules.evaluate_release_conditions(0.55, &criteria).unwrap();
    assert_eq!(low.assessment.level, RiskLevel::HighRisk);
    assert_eq!(
        (low.should_release, low.reason.as_str()),
        (false, "Pressure below high-risk threshold")
    );

    let high = rules.evaluate_release_conditions(0.72, &criteria).unwrap();
    assert_eq!((high.should_release, high.reason.as_str()), (true, "High-risk location"));
}

#[test]
fn empty_criteria_is_an_error_not_a_deny() {
    let result = BogReleaseRules::new().evaluate_release_conditions(0.65, &[]);

    assert!(matches!(result, Err(BogError::Shape(ShapeError::Empty { .. }))));
}

#[test]
fn expert_panel_to_decision() {
    let (criteria, c) = Criteria::bog_default();
    let judgments = [
        ("expert 1", 0.376, [(0.9, 0.1), (0.8, 0.2), (0.7, 0.3), (0.6, 0.4), (0.5, 0.5)]),
        ("expert 2", 0.289, [(0.85, 0.15), (0.75, 0.25), (0.65, 0.35), (0.55, 0.45), (0.45, 0.55)]),
        ("expert 3", 0.177, [(0.95, 0.05), (0.85, 0.15), (0.75, 0.25), (0.65, 0.35), (0.55, 0.45)]),
        ("expert 4", 0.157, [(0.9, 0.1), (0.8, 0.2), (0.7, 0.3), (0.6, 0.4), (0.5, 0.5)]),
    ];
    let handles = [c.population_density, c.road_type, c.weather, c.driving_time, c.site_type];

    let mut panel = ExpertPanel::new();
    for (name, weight, values) in judgments {
        let mut assessment = Assessment::new();
        for (criterion, (mu, nu)) in handles.iter().zip(values) {
            assessment.add(*criterion, ffs(mu, nu));
        }
        panel.add_expert(name, weight, assessment);
    }

    let aggregated = panel.aggregate(&criteria, &Ffldwa::default()).unwrap();
    let scores = aggregated.scores();

    assert_eq!(aggregated.len(), 5);
    assert!(scores.windows(2).all(|w| w[0] > w[1]));

    let decision = BogReleaseRules::new()
        .evaluate_release_conditions(0.65, aggregated.values())
        .unwrap();

    assert_eq!(decision.assessment.level, RiskLevel::HighRisk);
    assert!(!decision.should_release);
    assert_eq!(decision.reason, ReleaseReason::BelowHighRiskThreshold);
}

#[test]
fn observed_site_to_decision() {
    let observation = EnvironmentalObservation {
        population_density: 3000.,
        road_type: RoadType::from_label("expressway"),
        weather: WeatherCondition::from_label("sunny"),
        time_of_day: TimeOfDay::from_hour(11),
        site_type: SiteType::from_population_density(3000.),
    };
    let values = observation.map(&MappingConfig::default()).unwrap();

    let decision = BogReleaseRules::new().evaluate_release_conditions(0.65, &values).unwrap();

    assert!(decision.assessment.score > 0.78 && decision.assessment.score < 0.8);
    assert_eq!(decision.assessment.level, RiskLevel::HighRisk);
    assert_eq!(decision.reason, ReleaseReason::BelowHighRiskThreshold);
}

#[test]
fn swara_weights_feed_the_rule_engine() {
    let rules = BogReleaseRules::new();
    let criteria = [ffs(0.9, 0.1), ffs(0.3, 0.6), ffs(0.3, 0.6)];

    // The dangerous criterion is also the most important one
    let swara = derive_weights(&[1.547, 0.758, 0.752]).unwrap();
    let weights = swara.in_input_order();

    let uniform = rules.evaluate_release_conditions(0.65, &criteria).unwrap();
    let weighted = rules.evaluate_with_weights(0.65, &criteria, &weights).unwrap();

    assert!(weighted.assessment.score > uniform.assessment.score);
}

#[test]
fn configured_engine() {
    let config = EngineConfig::from_toml_str(
        r#"
        [pressure]
        safe = 0.4
        warning = 0.5
        high_risk = 0.6
        prohibited = 0.9
        "#,
    )
    .unwrap();
    let rules = BogReleaseRules::from_config(&config).unwrap();

    let decision = rules
        .evaluate_release_conditions(0.62, &same_for_all_criteria(0.8, 0.3))
        .unwrap();

    assert_eq!(decision.reason, ReleaseReason::HighRiskLocation);
}

#[test]
fn dombi_configured_engine() {
    let config = EngineConfig::from_toml_str("[aggregation]\nop = \"dombi\"\nc = 2.0").unwrap();
    let rules = BogReleaseRules::from_config(&config).unwrap();

    assert_eq!(rules.ffldwa().op(), AggregationOp::Dombi);

    let decision = rules
        .evaluate_release_conditions(0.75, &same_for_all_criteria(0.2, 0.8))
        .unwrap();
    assert_eq!(decision.reason, ReleaseReason::SafeLocation);

    let singular = rules.evaluate_release_conditions(0.75, &[ffs(1., 0.), ffs(0.2, 0.8)]);
    assert!(matches!(
        singular,
        Err(BogError::Domain(DomainError::DombiSingularity { index: 0, .. }))
    ));
}

#[test]
fn invalid_config_is_rejected() {
    let config = EngineConfig::from_toml_str("[risk]\nwarning = 0.7\nhigh_risk = 0.6").unwrap();

    assert!(matches!(
        BogReleaseRules::from_config(&config),
        Err(BogError::Config(ConfigError::NotAscending { what: "risk score", .. }))
    ));
}

#[test]
fn engine_is_shareable_across_threads() {
    let rules = std::sync::Arc::new(BogReleaseRules::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let rules = rules.clone();
            std::thread::spawn(move || {
                rules
                    .evaluate_release_conditions(0.5 + 0.1 * i as f64, &same_for_all_criteria(0.2, 0.8))
                    .map(|d| d.should_release)
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Ok(true));
    }
}
