use chrono::{DateTime, Utc};

use crate::domain::configuration::{CarConfiguration, DEFAULT_EXTERIOR_COLOR};
use crate::domain::design::{
    summarize_customers, CarDesign, CustomerIdentity, CustomerSummary, DesignFilter, DesignStats,
    DesignStatus,
};
use crate::domain::errors::DomainError;
use crate::domain::ports::DesignRepository;
use crate::domain::pricing;

pub const DEFAULT_BUDGET_LABEL: &str = "$50k-75k";
pub const DEFAULT_ENGINE_TYPE: &str = "Petrol";
pub const DEFAULT_TRANSMISSION: &str = "Automatic";
pub const DEFAULT_TYRES: &str = "Normal";
pub const DEFAULT_WHEELS: &str = "Classic";
pub const DEFAULT_EXHAUST: &str = "Single";
pub const DEFAULT_BODY_STYLE: &str = "Sedan";
pub const DEFAULT_INTERIOR_LAYOUT: &str = "Classic";

/// Owns the list of submitted designs and keeps storage in step with it.
///
/// Lookups by id are best-effort: updating or deleting a design that does
/// not exist is a silent no-op.
pub struct DesignService<R> {
    repo: R,
    designs: Vec<CarDesign>,
    next_id: i64,
}

impl<R: DesignRepository> DesignService<R> {
    /// Loads the persisted list and continues numbering after its highest id.
    pub fn new(repo: R) -> Result<Self, DomainError> {
        let designs = repo.load()?;
        let next_id = next_id_after(&designs);
        log::info!(
            "loaded {} stored designs, next design id is {}",
            designs.len(),
            next_id
        );
        Ok(Self {
            repo,
            designs,
            next_id,
        })
    }

    pub fn submit_design(
        &mut self,
        customer: &CustomerIdentity,
        config: &CarConfiguration,
    ) -> Result<CarDesign, DomainError> {
        self.submit_design_at(customer, config, Utc::now())
    }

    pub fn submit_design_at(
        &mut self,
        customer: &CustomerIdentity,
        config: &CarConfiguration,
        submitted_at: DateTime<Utc>,
    ) -> Result<CarDesign, DomainError> {
        customer.validate()?;

        let budget = budget_label(config.budget);
        let total_price = pricing::total_price(config);
        let design = CarDesign {
            id: self.next_id,
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            customer_email: customer.email.clone(),
            budget,
            engine_type: or_default(&config.engine_type, DEFAULT_ENGINE_TYPE),
            transmission: or_default(&config.transmission, DEFAULT_TRANSMISSION),
            tyres: or_default(&config.tyres, DEFAULT_TYRES),
            wheels: or_default(&config.rims, DEFAULT_WHEELS),
            exhaust_type: or_default(&config.exhaust_style, DEFAULT_EXHAUST),
            body_style: or_default(&config.body_style, DEFAULT_BODY_STYLE),
            exterior_color: or_default(&config.exterior_color, DEFAULT_EXTERIOR_COLOR),
            interior_layout: or_default(&config.dashboard_layout, DEFAULT_INTERIOR_LAYOUT),
            features: config.smart_tech.clone(),
            status: DesignStatus::UnderReview,
            submitted_at,
            total_price,
        };
        self.next_id += 1;

        self.designs.push(design.clone());
        if let Err(e) = self.repo.save(&self.designs) {
            self.designs.pop();
            return Err(e);
        }

        log::info!(
            "design {} submitted by customer {}, priced at {}",
            design.id,
            design.customer_id,
            design.total_price
        );
        Ok(design)
    }

    /// Reloads from storage so the result reflects every earlier session.
    pub fn all_designs(&mut self) -> Result<Vec<CarDesign>, DomainError> {
        self.designs = self.repo.load()?;
        self.next_id = self.next_id.max(next_id_after(&self.designs));
        Ok(self.designs.clone())
    }

    pub fn update_design_status(&mut self, id: i64, status: DesignStatus) -> Result<(), DomainError> {
        let Some(design) = self.designs.iter_mut().find(|d| d.id == id) else {
            log::debug!("status update for unknown design {id} ignored");
            return Ok(());
        };
        design.status = status;
        self.repo.save(&self.designs)?;
        log::info!("design {id} moved to '{status}'");
        Ok(())
    }

    pub fn delete_design(&mut self, id: i64) -> Result<(), DomainError> {
        let before = self.designs.len();
        self.designs.retain(|d| d.id != id);
        self.repo.save(&self.designs)?;
        if self.designs.len() < before {
            log::info!("design {id} deleted");
        }
        Ok(())
    }

    pub fn find(&self, id: i64) -> Option<&CarDesign> {
        self.designs.iter().find(|d| d.id == id)
    }

    pub fn designs(&self) -> &[CarDesign] {
        &self.designs
    }

    pub fn designs_by_customer(&self, customer_id: i64) -> Vec<CarDesign> {
        self.designs
            .iter()
            .filter(|d| d.customer_id == customer_id)
            .cloned()
            .collect()
    }

    pub fn designs_by_status(&self, status: DesignStatus) -> Vec<CarDesign> {
        self.designs
            .iter()
            .filter(|d| d.status == status)
            .cloned()
            .collect()
    }

    pub fn filtered(&self, filter: &DesignFilter) -> Vec<CarDesign> {
        self.designs
            .iter()
            .filter(|d| filter.matches(d))
            .cloned()
            .collect()
    }

    pub fn stats(&self) -> DesignStats {
        DesignStats::of(&self.designs)
    }

    pub fn customer_summaries(&self) -> Vec<CustomerSummary> {
        summarize_customers(&self.designs)
    }
}

fn next_id_after(designs: &[CarDesign]) -> i64 {
    designs.iter().map(|d| d.id).max().unwrap_or(0) + 1
}

/// Budget label stored on a design: the numeric budget, or the default
/// bucket when no budget was chosen.
pub fn budget_label(budget: u64) -> String {
    if budget == 0 {
        DEFAULT_BUDGET_LABEL.to_string()
    } else {
        budget.to_string()
    }
}

fn or_default(value: &str, default: &str) -> String {
    if value.trim().is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::TimeZone;

    use super::*;
    use crate::domain::design::fixtures::design;

    #[derive(Clone, Default)]
    struct SharedRepo {
        stored: Arc<Mutex<Vec<CarDesign>>>,
        saves: Arc<Mutex<usize>>,
    }

    impl SharedRepo {
        fn with(designs: Vec<CarDesign>) -> Self {
            let repo = Self::default();
            *repo.stored.lock().unwrap() = designs;
            repo
        }

        fn stored(&self) -> Vec<CarDesign> {
            self.stored.lock().unwrap().clone()
        }

        fn saves(&self) -> usize {
            *self.saves.lock().unwrap()
        }
    }

    impl DesignRepository for SharedRepo {
        fn load(&self) -> Result<Vec<CarDesign>, DomainError> {
            Ok(self.stored())
        }

        fn save(&self, designs: &[CarDesign]) -> Result<(), DomainError> {
            *self.stored.lock().unwrap() = designs.to_vec();
            *self.saves.lock().unwrap() += 1;
            Ok(())
        }
    }

    struct FailingRepo;

    impl DesignRepository for FailingRepo {
        fn load(&self) -> Result<Vec<CarDesign>, DomainError> {
            Ok(Vec::new())
        }

        fn save(&self, _designs: &[CarDesign]) -> Result<(), DomainError> {
            Err(DomainError::Internal("disk full".into()))
        }
    }

    fn customer() -> CustomerIdentity {
        CustomerIdentity::new(1, "Kushagra", "kushagra@example.com").unwrap()
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 4, day, 9, 30, 0).unwrap()
    }

    #[test]
    fn ids_start_at_one_and_increase() {
        let mut service = DesignService::new(SharedRepo::default()).unwrap();
        let config = CarConfiguration::default();

        let ids: Vec<i64> = (0..3)
            .map(|_| service.submit_design(&customer(), &config).unwrap().id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn numbering_resumes_after_highest_stored_id() {
        let repo = SharedRepo::with(vec![
            design(4, 1, DesignStatus::Approved, 1),
            design(9, 2, DesignStatus::UnderReview, 2),
        ]);
        let mut service = DesignService::new(repo).unwrap();

        let created = service
            .submit_design(&customer(), &CarConfiguration::default())
            .unwrap();

        assert_eq!(created.id, 10);
    }

    #[test]
    fn reload_never_moves_the_counter_backwards() {
        let repo = SharedRepo::default();
        let mut service = DesignService::new(repo.clone()).unwrap();
        let config = CarConfiguration::default();
        service.submit_design(&customer(), &config).unwrap();
        service.submit_design(&customer(), &config).unwrap();
        service.delete_design(2).unwrap();

        service.all_designs().unwrap();
        let next = service.submit_design(&customer(), &config).unwrap();

        assert_eq!(next.id, 3);
    }

    #[test]
    fn submission_flattens_configuration_and_prices_it() {
        let repo = SharedRepo::default();
        let mut service = DesignService::new(repo.clone()).unwrap();
        let config = CarConfiguration {
            budget: 0,
            engine_type: "Electric".into(),
            smart_tech: vec!["AI Assistant".into(), "Heads-Up Display".into()],
            rims: "Sport".into(),
            rim_size: 19,
            airbags: 6,
            roof_rack: true,
            dashboard_layout: "AI Cockpit".into(),
            ..CarConfiguration::default()
        };

        let created = service.submit_design_at(&customer(), &config, at(2)).unwrap();

        assert_eq!(created.status, DesignStatus::UnderReview);
        assert_eq!(created.submitted_at, at(2));
        assert_eq!(created.customer_name, "Kushagra");
        assert_eq!(created.customer_email, "kushagra@example.com");
        assert_eq!(created.budget, DEFAULT_BUDGET_LABEL);
        assert_eq!(created.engine_type, "Electric");
        assert_eq!(created.transmission, DEFAULT_TRANSMISSION);
        assert_eq!(created.wheels, "Sport");
        assert_eq!(created.body_style, DEFAULT_BODY_STYLE);
        assert_eq!(created.interior_layout, "AI Cockpit");
        assert_eq!(created.features.len(), 2);
        // 500000 + 0 + 2*20000 + 19*10000 + 6*5000 + 10000
        assert_eq!(created.total_price, 770_000);
        assert_eq!(repo.stored(), vec![created]);
    }

    #[test]
    fn numeric_budget_becomes_the_label() {
        let mut service = DesignService::new(SharedRepo::default()).unwrap();
        let config = CarConfiguration {
            budget: 750_000,
            ..CarConfiguration::default()
        };

        let created = service.submit_design(&customer(), &config).unwrap();

        assert_eq!(created.budget, "750000");
        assert_eq!(created.total_price, pricing::total_price(&config));
    }

    #[test]
    fn unset_budget_is_labelled_but_not_priced() {
        let mut service = DesignService::new(SharedRepo::default()).unwrap();
        let config = CarConfiguration {
            budget: 0,
            smart_tech: vec![
                "AI Assistant".into(),
                "Heads-Up Display".into(),
                "360° Camera".into(),
            ],
            rim_size: 18,
            airbags: 4,
            tow_hitch: true,
            roof_rack: false,
            ..CarConfiguration::default()
        };

        let created = service.submit_design(&customer(), &config).unwrap();

        assert_eq!(created.budget, DEFAULT_BUDGET_LABEL);
        assert_eq!(created.total_price, 775_000);
    }

    #[test]
    fn incomplete_identity_is_rejected() {
        let repo = SharedRepo::default();
        let mut service = DesignService::new(repo.clone()).unwrap();
        let anonymous = CustomerIdentity {
            id: 3,
            name: String::new(),
            email: String::new(),
        };

        let result = service.submit_design(&anonymous, &CarConfiguration::default());

        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
        assert!(repo.stored().is_empty());
    }

    #[test]
    fn failed_save_leaves_list_unchanged() {
        let mut service = DesignService::new(FailingRepo).unwrap();

        let result = service.submit_design(&customer(), &CarConfiguration::default());

        assert!(result.is_err());
        assert!(service.designs().is_empty());
    }

    #[test]
    fn status_update_is_persisted_and_visible_after_reload() {
        let repo = SharedRepo::default();
        let mut service = DesignService::new(repo.clone()).unwrap();
        let created = service
            .submit_design(&customer(), &CarConfiguration::default())
            .unwrap();

        service
            .update_design_status(created.id, DesignStatus::Approved)
            .unwrap();

        let reloaded = DesignService::new(repo).unwrap().all_designs().unwrap();
        assert_eq!(reloaded[0].status, DesignStatus::Approved);
    }

    #[test]
    fn status_update_of_unknown_id_is_silent() {
        let repo = SharedRepo::with(vec![design(1, 1, DesignStatus::UnderReview, 1)]);
        let mut service = DesignService::new(repo.clone()).unwrap();

        service
            .update_design_status(42, DesignStatus::Approved)
            .unwrap();

        assert_eq!(repo.saves(), 0);
        assert_eq!(repo.stored()[0].status, DesignStatus::UnderReview);
    }

    #[test]
    fn deleting_twice_is_harmless() {
        let repo = SharedRepo::with(vec![
            design(1, 1, DesignStatus::UnderReview, 1),
            design(2, 1, DesignStatus::UnderReview, 2),
        ]);
        let mut service = DesignService::new(repo.clone()).unwrap();

        service.delete_design(1).unwrap();
        service.delete_design(1).unwrap();
        service.delete_design(77).unwrap();

        assert_eq!(service.designs().len(), 1);
        assert_eq!(repo.stored().len(), 1);
        assert_eq!(repo.stored()[0].id, 2);
    }

    #[test]
    fn all_designs_picks_up_external_changes() {
        let repo = SharedRepo::default();
        let mut service = DesignService::new(repo.clone()).unwrap();
        assert!(service.all_designs().unwrap().is_empty());

        repo.save(&[design(5, 3, DesignStatus::InProgress, 3)]).unwrap();

        let designs = service.all_designs().unwrap();
        assert_eq!(designs.len(), 1);
        assert_eq!(designs[0].id, 5);
    }

    #[test]
    fn queries_filter_the_in_memory_list() {
        let repo = SharedRepo::with(vec![
            design(1, 1, DesignStatus::UnderReview, 1),
            design(2, 2, DesignStatus::Approved, 2),
            design(3, 1, DesignStatus::Approved, 3),
        ]);
        let service = DesignService::new(repo.clone()).unwrap();

        let mine: Vec<i64> = service.designs_by_customer(1).iter().map(|d| d.id).collect();
        let approved: Vec<i64> = service
            .designs_by_status(DesignStatus::Approved)
            .iter()
            .map(|d| d.id)
            .collect();

        assert_eq!(mine, vec![1, 3]);
        assert_eq!(approved, vec![2, 3]);
        assert_eq!(service.stats().approved, 2);
        assert_eq!(service.customer_summaries().len(), 2);
        assert!(service.find(2).is_some());
        assert!(service.find(4).is_none());
        assert_eq!(repo.saves(), 0);
    }

    #[test]
    fn filtered_applies_admin_criteria() {
        let repo = SharedRepo::with(vec![
            design(1, 1, DesignStatus::UnderReview, 1),
            design(2, 2, DesignStatus::Approved, 2),
        ]);
        let service = DesignService::new(repo).unwrap();

        let filter = DesignFilter {
            status: Some(DesignStatus::Approved),
            ..DesignFilter::default()
        };

        let ids: Vec<i64> = service.filtered(&filter).iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![2]);
    }
}
