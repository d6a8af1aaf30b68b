use list_service_core::contract::StoredRecord;

pub trait RecordStore {
    fn read_record(&self, list_id: &str) -> Result<Option<StoredRecord>, String>;
    fn write_record(&self, record: &StoredRecord) -> Result<(), String>;
    fn scan_records(&self) -> Result<Vec<StoredRecord>, String>;
    fn remove_record(&self, list_id: &str) -> Result<(), String>;
}
