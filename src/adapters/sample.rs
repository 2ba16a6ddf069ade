use crate::core::{AlumniRecord, Result, RosterSource};

/// The mock roster the directory ships with when no file is given.
#[derive(Debug, Clone, Default)]
pub struct BuiltinRoster;

impl BuiltinRoster {
    pub fn new() -> Self {
        Self
    }
}

const SAMPLE_ALUMNI: [(&str, i32, &str, &str); 8] = [
    ("Dr. Arindam Bose", 1998, "Kolkata, WB", "Cardiologist"),
    ("Sneha Roy", 2005, "Bangalore, KA", "Product Designer"),
    ("Rahul Sen", 2010, "Pune, MH", "Software Engineer"),
    ("Priya Chatterjee", 2002, "London, UK", "Investment Banker"),
    ("Amit Ghosh", 1995, "Delhi, DL", "Civil Servant"),
    ("Moumita Das", 2015, "Kolkata, WB", "Data Scientist"),
    ("Subhajit Mukherjee", 2010, "Hyderabad, TS", "Software Engineer"),
    ("Ananya Banerjee", 2005, "Boston, MA", "Research Scientist"),
];

impl RosterSource for BuiltinRoster {
    fn name(&self) -> &str {
        "builtin"
    }

    fn load(&self) -> Result<Vec<AlumniRecord>> {
        let records = SAMPLE_ALUMNI
            .iter()
            .enumerate()
            .map(|(index, (name, batch, location, profession))| {
                let id = (index + 1).to_string();
                AlumniRecord {
                    avatar: format!("https://i.pravatar.cc/150?u={}", id),
                    id,
                    name: name.to_string(),
                    batch: *batch,
                    location: location.to_string(),
                    profession: profession.to_string(),
                }
            })
            .collect();
        Ok(records)
    }
}
