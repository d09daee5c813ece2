mod controller;

pub use controller::{
    SearchController, SearchState, SearchTicket, FETCH_FAILED_MESSAGE, NO_RESULTS_MESSAGE,
};
