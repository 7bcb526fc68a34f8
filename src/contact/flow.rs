//! Step state machine for the contact wizard.

use super::inquiry::InquiryType;

/// Which view of the wizard is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContactStep {
    /// Step 1: choose a service category.
    #[default]
    SelectService,
    /// Step 2: contact details for the chosen category.
    ContactDetails,
    /// Step 3: thank-you message.
    Sent,
}

impl ContactStep {
    /// 1-based step number shown in the progress indicator.
    pub fn number(self) -> u8 {
        match self {
            Self::SelectService => 1,
            Self::ContactDetails => 2,
            Self::Sent => 3,
        }
    }
}

/// One visitor's pass through the wizard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFlow {
    step: ContactStep,
    selected: Option<InquiryType>,
}

impl ContactFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> ContactStep {
        self.step
    }

    pub fn selected(&self) -> Option<InquiryType> {
        self.selected
    }

    /// Choose a category and move on to the details step.
    pub fn select(&mut self, inquiry: InquiryType) {
        self.selected = Some(inquiry);
        self.step = ContactStep::ContactDetails;
    }

    /// Return to the category list. The selection stays highlighted.
    pub fn back(&mut self) {
        self.step = ContactStep::SelectService;
    }

    /// Start over with nothing selected.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Move to the thank-you step. Only valid from the details step.
    pub fn mark_sent(&mut self) -> bool {
        if self.step == ContactStep::ContactDetails && self.selected.is_some() {
            self.step = ContactStep::Sent;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_records_exactly_the_choice() {
        let mut flow = ContactFlow::new();
        assert_eq!(flow.step(), ContactStep::SelectService);

        flow.select(InquiryType::Vas);
        assert_eq!(flow.step(), ContactStep::ContactDetails);
        assert_eq!(flow.selected(), Some(InquiryType::Vas));

        flow.select(InquiryType::Wms);
        assert_eq!(flow.selected(), Some(InquiryType::Wms));
    }

    #[test]
    fn test_back_keeps_selection_reset_clears_it() {
        let mut flow = ContactFlow::new();
        flow.select(InquiryType::Ecommerce);

        flow.back();
        assert_eq!(flow.step(), ContactStep::SelectService);
        assert_eq!(flow.selected(), Some(InquiryType::Ecommerce));

        flow.reset();
        assert_eq!(flow, ContactFlow::new());
    }

    #[test]
    fn test_sent_requires_details_step() {
        let mut flow = ContactFlow::new();
        assert!(!flow.mark_sent());

        flow.select(InquiryType::B2b);
        assert!(flow.mark_sent());
        assert_eq!(flow.step(), ContactStep::Sent);
        assert_eq!(flow.step().number(), 3);
    }
}
