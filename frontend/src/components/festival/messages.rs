use common::model::festival::FestivalRecord;

pub enum Msg {
    UpdateFestival(String),
    Submit,
    Received(Result<FestivalRecord, String>),
}
