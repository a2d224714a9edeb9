//! End-to-end behavior of the citizen services through the public crate API.

mod common {
    use std::sync::Arc;
    use std::time::Duration;

    use water_portal::portal::directory::{PropertyLookupService, StaticPropertyDirectory};
    use water_portal::portal::grievances::sample_grievances;
    use water_portal::portal::tracking::TrackingCatalog;

    pub(super) fn lookup_service() -> PropertyLookupService<StaticPropertyDirectory> {
        let directory = StaticPropertyDirectory::built_in(Duration::ZERO);
        PropertyLookupService::new(Arc::new(directory))
    }

    pub(super) fn tracking() -> TrackingCatalog {
        TrackingCatalog::standard(&sample_grievances())
    }
}

mod billing {
    use rust_decimal::Decimal;
    use water_portal::portal::billing::{
        compute_bill, BillingError, ConnectionType, MeterMode, RateSchedule,
    };

    #[test]
    fn metered_totals_scale_with_consumption() {
        let schedule = RateSchedule::standard();
        for (connection_type, rate) in [
            (ConnectionType::Residential, 8),
            (ConnectionType::Commercial, 15),
            (ConnectionType::Industrial, 25),
        ] {
            for (previous, current) in [(0, 0), (100, 150), (377, 1000)] {
                let bill = compute_bill(
                    &schedule,
                    connection_type,
                    MeterMode::Metered,
                    Some(Decimal::from(previous)),
                    Some(Decimal::from(current)),
                )
                .expect("ordered readings");
                assert_eq!(bill.total_amount, Decimal::from((current - previous) * rate));
            }
        }
    }

    #[test]
    fn non_metered_totals_are_flat() {
        let schedule = RateSchedule::standard();
        for (connection_type, rate) in [
            (ConnectionType::Residential, 500),
            (ConnectionType::Commercial, 1500),
            (ConnectionType::Industrial, 3000),
        ] {
            let bill = compute_bill(
                &schedule,
                connection_type,
                MeterMode::NonMetered,
                Some(Decimal::from(999)),
                None,
            )
            .expect("readings ignored");
            assert_eq!(bill.total_amount, Decimal::from(rate));
            assert_eq!(bill.consumed_units, Decimal::ZERO);
        }
    }

    #[test]
    fn residential_metered_scenario() {
        let bill = compute_bill(
            &RateSchedule::standard(),
            ConnectionType::Residential,
            MeterMode::Metered,
            Some(Decimal::from(100)),
            Some(Decimal::from(150)),
        )
        .expect("valid readings");
        assert_eq!(bill.consumed_units, Decimal::from(50));
        assert_eq!(bill.display_total(), "₹400.00");
    }

    #[test]
    fn reversed_readings_are_rejected() {
        let result = compute_bill(
            &RateSchedule::standard(),
            ConnectionType::Industrial,
            MeterMode::Metered,
            Some(Decimal::from(150)),
            Some(Decimal::from(100)),
        );
        assert!(matches!(result, Err(BillingError::InvalidReadingOrder(_))));
    }
}

mod directory {
    use super::common::lookup_service;
    use water_portal::portal::directory::{LookupError, PropertyField, PropertyForm};

    #[tokio::test]
    async fn lookup_ignores_case() {
        let service = lookup_service();
        let lower = service.lookup("p12345").await.expect("sample present");
        let upper = service.lookup("P12345").await.expect("sample present");
        assert_eq!(lower, upper);

        let by_mobile = service.lookup("9876543213").await.expect("mobile match");
        assert_eq!(by_mobile.owner_name, "Sunita Reddy");
    }

    #[tokio::test]
    async fn miss_leaves_filled_form_intact() {
        let service = lookup_service();
        let mut form = PropertyForm::default();
        form.set(PropertyField::OwnerName, "Meera Joshi").expect("editable");
        form.set(PropertyField::Address, "12, Lake View").expect("editable");
        let before = form.clone();

        let result = service.lookup("UNKNOWN-1").await;
        assert!(matches!(result, Err(LookupError::NotFound { .. })));
        form.apply_lookup(result.ok().as_ref());

        assert_eq!(form, before);
    }
}

mod tracking {
    use super::common::tracking;
    use water_portal::portal::tracking::{TrackingError, TrackingKind};

    #[test]
    fn prefixes_select_the_record_kind() {
        let catalog = tracking();
        assert_eq!(
            catalog.track("APP-2025-001").map(|record| record.kind),
            Ok(TrackingKind::Application)
        );
        assert_eq!(
            catalog.track("GRV-2025-023").map(|record| record.kind),
            Ok(TrackingKind::Grievance)
        );
        assert!(matches!(
            catalog.track("XYZ-001"),
            Err(TrackingError::NotFound(_))
        ));
    }
}
