use rust_decimal::Decimal;
use trsy_core::{fan_add, fan_update, KeyedCache, Listener, Service};

use crate::inquiry::{Inquiry, InquiryState};

/// The fixed quote this system always responds with.
pub const FIXED_QUOTE_PRICE: Decimal = Decimal::from_parts(100, 0, 0, false, 0);

/// Drives a client inquiry through `RECEIVED -> QUOTED -> DONE`.
///
/// The quote-and-done steps are not external listeners re-entering this
/// service — a listener only ever sees `&Inquiry` and cannot drive a state
/// transition — so both are inlined as private recursive calls into
/// [`Service::on_message`], the same way the original's publish-connector
/// closes the loop by calling back into the service directly rather than
/// through another listener object.
#[derive(Debug, Default)]
pub struct InquiryService {
    cache: KeyedCache<String, Inquiry>,
    listeners: Vec<Box<dyn Listener<Inquiry>>>,
}

impl InquiryService {
    pub fn new() -> Self {
        Self::default()
    }

    fn send_quote(&mut self, inquiry_id: &str) {
        let Some(inquiry) = self.cache.try_get(inquiry_id) else {
            return;
        };
        let mut quoted = inquiry.clone();
        quoted.price = FIXED_QUOTE_PRICE;
        quoted.state = InquiryState::Quoted;
        self.on_message(quoted);
    }

    fn mark_done(&mut self, inquiry_id: &str) {
        let Some(inquiry) = self.cache.try_get(inquiry_id) else {
            return;
        };
        let mut done = inquiry.clone();
        done.state = InquiryState::Done;
        self.on_message(done);
    }

    /// Transition a still-open inquiry straight to `CUSTOMER_REJECTED`.
    pub fn reject_inquiry(&mut self, inquiry_id: &str) {
        let Some(inquiry) = self.cache.try_get(inquiry_id) else {
            return;
        };
        let mut rejected = inquiry.clone();
        rejected.state = InquiryState::CustomerRejected;
        self.on_message(rejected);
    }
}

impl Service<String, Inquiry> for InquiryService {
    fn get_data(&self, key: &String) -> &Inquiry {
        self.cache.get(key)
    }

    fn on_message(&mut self, inquiry: Inquiry) {
        let inquiry_id = inquiry.inquiry_id.clone();
        let state = inquiry.state;
        self.cache.upsert(inquiry_id.clone(), inquiry.clone());

        match state {
            InquiryState::Received => {
                fan_add(&mut self.listeners, &inquiry);
                self.send_quote(&inquiry_id);
            }
            InquiryState::Quoted => {
                fan_update(&mut self.listeners, &inquiry);
                self.mark_done(&inquiry_id);
            }
            InquiryState::Done | InquiryState::Rejected | InquiryState::CustomerRejected => {
                fan_update(&mut self.listeners, &inquiry);
            }
        }
    }

    fn add_listener(&mut self, listener: Box<dyn Listener<Inquiry>>) {
        self.listeners.push(listener);
    }

    fn listeners(&self) -> &[Box<dyn Listener<Inquiry>>] {
        &self.listeners
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::cell::RefCell;
    use std::rc::Rc;
    use trsy_product::TradeSide;

    #[derive(Debug, Default)]
    struct Recorder {
        states: Vec<InquiryState>,
    }

    struct RecordingListener(Rc<RefCell<Recorder>>);

    impl Listener<Inquiry> for RecordingListener {
        fn process_add(&mut self, value: &Inquiry) {
            self.0.borrow_mut().states.push(value.state);
        }

        fn process_update(&mut self, value: &Inquiry) {
            self.0.borrow_mut().states.push(value.state);
        }
    }

    fn received() -> Inquiry {
        Inquiry::new(
            "IQ1".to_string(),
            "X".to_string(),
            TradeSide::Buy,
            1_000_000,
            dec!(99.5),
            InquiryState::Received,
        )
    }

    #[test]
    fn a_received_inquiry_walks_itself_to_done_with_a_fixed_quote() {
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        let mut service = InquiryService::new();
        service.add_listener(Box::new(RecordingListener(recorder.clone())));

        service.on_message(received());

        assert_eq!(
            recorder.borrow().states,
            vec![InquiryState::Received, InquiryState::Quoted, InquiryState::Done]
        );
        let stored = service.get_data(&"IQ1".to_string());
        assert_eq!(stored.state, InquiryState::Done);
        assert_eq!(stored.price, dec!(100));
    }

    #[test]
    fn reject_inquiry_transitions_a_cached_inquiry_to_customer_rejected() {
        let mut service = InquiryService::new();
        service.on_message(received());
        service.reject_inquiry("IQ1");
        assert_eq!(service.get_data(&"IQ1".to_string()).state, InquiryState::CustomerRejected);
    }

    #[test]
    fn reject_inquiry_on_an_unknown_id_is_a_no_op() {
        let mut service = InquiryService::new();
        service.reject_inquiry("NOPE");
        assert!(!service.cache.contains_key(&"NOPE".to_string()));
    }
}
