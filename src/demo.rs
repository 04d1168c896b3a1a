// src/demo.rs
//! Built-in sample listings for running the analysis without a live portal

use crate::types::RawJobRecord;

pub fn sample_jobs() -> Vec<RawJobRecord> {
    vec![
        RawJobRecord::new(
            "Data Analyst - Business Intelligence",
            "TechCorp India",
            "Bangalore, Karnataka",
            "6-8 LPA",
            "Python, SQL, Tableau, Excel, Power BI, data visualization, business intelligence",
        ),
        RawJobRecord::new(
            "Junior Data Analyst",
            "Analytics Solutions",
            "Mumbai, Maharashtra",
            "4-6 LPA",
            "SQL, Excel, Python, pandas, matplotlib, data analysis, reporting",
        ),
        RawJobRecord::new(
            "Senior Data Analyst",
            "DataTech Pvt Ltd",
            "Hyderabad, Telangana",
            "8-12 LPA",
            "Python, R, SQL, machine learning, statistics, tableau, power bi",
        ),
        RawJobRecord::new(
            "Business Data Analyst",
            "Enterprise Solutions",
            "Pune, Maharashtra",
            "5-7 LPA",
            "SQL, Excel, Tableau, business intelligence, data visualization, analytics",
        ),
        RawJobRecord::new(
            "Data Analyst Intern",
            "StartupXYZ",
            "Bangalore, Karnataka",
            "2-3 LPA",
            "Python, pandas, numpy, matplotlib, jupyter, git, excel",
        ),
        RawJobRecord::new(
            "Financial Data Analyst",
            "FinanceCorps",
            "Delhi, NCR",
            "7-9 LPA",
            "SQL, Python, Excel, financial modeling, tableau, power bi, analytics",
        ),
        RawJobRecord::new(
            "Marketing Data Analyst",
            "AdTech Solutions",
            "Mumbai, Maharashtra",
            "5-8 LPA",
            "Python, SQL, Google Analytics, tableau, excel, marketing analytics",
        ),
        RawJobRecord::new(
            "Healthcare Data Analyst",
            "MedAnalytics",
            "Bangalore, Karnataka",
            "6-10 LPA",
            "R, SQL, Python, healthcare analytics, statistics, data mining",
        ),
    ]
}
