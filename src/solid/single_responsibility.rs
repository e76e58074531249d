//! S: one reason to change per type.
//!
//! `Employee` only works. Pay, reporting, and storage each live in their own
//! collaborator instead of piling onto the employee.

#[derive(Debug, Clone, PartialEq)]
pub struct Employee {
    name: String,
    monthly_salary: u32,
}

impl Employee {
    pub fn new(name: impl Into<String>, monthly_salary: u32) -> Self {
        Self {
            name: name.into(),
            monthly_salary,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn monthly_salary(&self) -> u32 {
        self.monthly_salary
    }

    pub fn work(&self) -> String {
        format!("{} is working", self.name)
    }
}

#[derive(Debug, Default)]
pub struct SalaryCalculator;

impl SalaryCalculator {
    pub fn annual_salary(&self, employee: &Employee) -> u64 {
        u64::from(employee.monthly_salary()) * 12
    }
}

#[derive(Debug, Default)]
pub struct ReportGenerator;

impl ReportGenerator {
    pub fn generate_report(&self, employee: &Employee, calculator: &SalaryCalculator) -> String {
        format!(
            "Report for {}: annual salary {}",
            employee.name(),
            calculator.annual_salary(employee)
        )
    }
}

/// In-memory only.
#[derive(Debug, Default)]
pub struct EmployeeRepository {
    employees: Vec<Employee>,
}

impl EmployeeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn save(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn find(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name() == name)
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_collaborator_does_one_job() {
        let alice = Employee::new("Alice", 1_000);
        let calculator = SalaryCalculator;

        assert_eq!(alice.work(), "Alice is working");
        assert_eq!(calculator.annual_salary(&alice), 12_000);
        assert_eq!(
            ReportGenerator.generate_report(&alice, &calculator),
            "Report for Alice: annual salary 12000"
        );
    }

    #[test]
    fn test_repository() {
        let mut repo = EmployeeRepository::new();
        assert!(repo.is_empty());
        repo.save(Employee::new("Bob", 2_000));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.find("Bob").map(Employee::monthly_salary), Some(2_000));
        assert!(repo.find("Carol").is_none());
    }

    #[test]
    fn test_annual_salary_does_not_overflow() {
        let rich = Employee::new("Max", u32::MAX);
        assert_eq!(SalaryCalculator.annual_salary(&rich), u64::from(u32::MAX) * 12);
    }
}
