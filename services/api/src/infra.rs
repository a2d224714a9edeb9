use metrics_exporter_prometheus::PrometheusHandle;
use rust_decimal::Decimal;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use water_portal::config::SimulationConfig;
use water_portal::error::AppError;
use water_portal::portal::applications::ApplicationIntake;
use water_portal::portal::assistant::ChatAssistant;
use water_portal::portal::billing::{BillCalculator, MeterReading};
use water_portal::portal::directory::{PropertyLookupService, StaticPropertyDirectory};
use water_portal::portal::grievances::GrievanceDesk;
use water_portal::portal::readings::{
    ConsumerProfile, MeterReadingDesk, SimulatedMeterReader, PREVIOUS_READING,
};
use water_portal::portal::simulation::{RandomSource, SeededRandom};
use water_portal::portal::tracking::TrackingCatalog;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Every citizen service, wired from the simulation settings.
#[derive(Clone)]
pub(crate) struct PortalServices {
    pub(crate) billing: Arc<BillCalculator>,
    pub(crate) lookup: Arc<PropertyLookupService<StaticPropertyDirectory>>,
    pub(crate) tracking: Arc<TrackingCatalog>,
    pub(crate) grievances: Arc<GrievanceDesk>,
    pub(crate) applications: Arc<ApplicationIntake>,
    pub(crate) readings: Arc<MeterReadingDesk<SimulatedMeterReader>>,
    pub(crate) assistant: Arc<ChatAssistant>,
}

impl PortalServices {
    pub(crate) fn from_config(simulation: &SimulationConfig) -> Result<Self, AppError> {
        let random: Arc<dyn RandomSource> = Arc::new(SeededRandom::from_clock());
        Self::with_random(simulation, random)
    }

    pub(crate) fn with_random(
        simulation: &SimulationConfig,
        random: Arc<dyn RandomSource>,
    ) -> Result<Self, AppError> {
        let directory = match &simulation.property_directory_csv {
            Some(path) => {
                let directory = StaticPropertyDirectory::from_path(path, simulation.lookup_delay)?;
                tracing::info!(
                    path = %path.display(),
                    records = directory.records().len(),
                    "property directory loaded"
                );
                directory
            }
            None => StaticPropertyDirectory::built_in(simulation.lookup_delay),
        };

        let grievances = GrievanceDesk::with_samples(random.clone(), simulation.submit_delay);
        let tracking = TrackingCatalog::standard(grievances.samples());
        let reader = SimulatedMeterReader::new(random.clone(), simulation.ocr_delay);

        Ok(Self {
            billing: Arc::new(BillCalculator::default()),
            lookup: Arc::new(PropertyLookupService::new(Arc::new(directory))),
            tracking: Arc::new(tracking),
            grievances: Arc::new(grievances),
            applications: Arc::new(ApplicationIntake::new(random, simulation.submit_delay)),
            readings: Arc::new(MeterReadingDesk::new(
                ConsumerProfile::sample(),
                PREVIOUS_READING,
                Arc::new(reader),
            )),
            assistant: Arc::new(ChatAssistant::new(simulation.assistant_delay)),
        })
    }
}

pub(crate) fn parse_reading(raw: &str) -> Result<Decimal, String> {
    MeterReading::parse_value(raw).map_err(|err| err.to_string())
}
