use crate::models::Job;

use super::JOBS;

#[derive(Debug)]
pub struct CompanyInfo {
    pub name: &'static str,
    pub website: &'static str,
    pub industry: &'static str,
    pub founded: &'static str,
    pub employees: &'static str,
    pub location: &'static str,
    pub about: &'static str,
}

#[derive(Debug)]
pub struct SimilarJob {
    pub title: &'static str,
    pub location: &'static str,
    pub salary: &'static str,
}

/// Everything the detail screen shows for one job
#[derive(Debug)]
pub struct JobDetail {
    pub job: &'static Job,
    pub description: &'static str,
    pub responsibilities: &'static [&'static str],
    pub benefits: &'static [&'static str],
    pub requirements: &'static [&'static str],
    pub nice_to_have: &'static [&'static str],
    pub company: Option<&'static CompanyInfo>,
}

const COMPANIES: &[CompanyInfo] = &[CompanyInfo {
    name: "TechSolutions Inc.",
    website: "www.techsolutions.com",
    industry: "Information Technology",
    founded: "2015",
    employees: "50-100",
    location: "New York, NY",
    about: "TechSolutions Inc. is a leading web development company specializing in creating innovative digital solutions for businesses of all sizes. We help our clients transform their ideas into functional, user-friendly websites and applications that drive growth and engagement.",
}];

/// Long-form descriptions keyed by job id; other jobs reuse their listing text
const LONG_DESCRIPTIONS: &[(&str, &str)] = &[(
    "1",
    "We are looking for an experienced web developer to join our team and help us build amazing websites and applications for our clients. The ideal candidate will have strong knowledge of JavaScript, React, and Node.js, and be passionate about creating user-friendly web experiences.\n\nAs a Web Developer at TechSolutions, you will be responsible for designing and implementing new features and functionality, maintaining and improving existing codebase, and collaborating with the design and product teams to ensure we deliver high-quality solutions to our clients.",
)];

const RESPONSIBILITIES: &[&str] = &[
    "Develop new user-facing features using React.js",
    "Build reusable components and libraries for future use",
    "Translate designs and wireframes into high-quality code",
    "Optimize components for maximum performance",
    "Coordinate with the rest of the team working on different layers of the infrastructure",
];

const BENEFITS: &[&str] = &[
    "Competitive salary package",
    "Flexible working hours",
    "Remote work options",
    "Health insurance",
    "Professional development opportunities",
];

const REQUIREMENTS: &[&str] = &[
    "Bachelor's degree in Computer Science, Engineering, or a related field",
    "3+ years of experience in web development",
    "Strong proficiency in JavaScript, including DOM manipulation and the JavaScript object model",
    "Thorough understanding of React.js and its core principles",
    "Experience with popular React workflows such as Redux or Context API",
    "Familiarity with newer specifications of ECMAScript",
    "Experience with data structure libraries such as Immutable.js",
];

const NICE_TO_HAVE: &[&str] = &[
    "Experience with testing frameworks such as Jest or Mocha",
    "Knowledge of modern authorization mechanisms, such as OAuth 2.0",
    "Familiarity with continuous integration",
];

pub const SIMILAR_JOBS: &[SimilarJob] = &[
    SimilarJob {
        title: "Frontend Developer",
        location: "San Francisco, CA",
        salary: "$65,000 - $85,000",
    },
    SimilarJob {
        title: "Full Stack Developer",
        location: "Boston, MA",
        salary: "$70,000 - $90,000",
    },
    SimilarJob {
        title: "React Developer",
        location: "Remote",
        salary: "$50 - $70/hr",
    },
];

pub fn lookup(id: &str) -> Option<JobDetail> {
    let job = JOBS.iter().find(|job| job.id == id)?;

    let description = LONG_DESCRIPTIONS
        .iter()
        .find(|(job_id, _)| *job_id == id)
        .map(|(_, text)| *text)
        .unwrap_or(job.description);

    Some(JobDetail {
        job,
        description,
        responsibilities: RESPONSIBILITIES,
        benefits: BENEFITS,
        requirements: REQUIREMENTS,
        nice_to_have: NICE_TO_HAVE,
        company: COMPANIES.iter().find(|c| c.name == job.company),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_job_has_a_detail_page() {
        for job in JOBS {
            assert_eq!(lookup(job.id).unwrap().job.id, job.id);
        }
    }

    #[test]
    fn first_job_has_long_description_and_company() {
        let detail = lookup("1").unwrap();
        assert!(detail.description.contains("As a Web Developer at TechSolutions"));
        assert_eq!(detail.company.unwrap().founded, "2015");

        assert!(lookup("2").unwrap().company.is_none());
    }

    #[test]
    fn unknown_id_is_none() {
        assert!(lookup("42").is_none());
        assert!(lookup("").is_none());
    }
}
