//! Compiled-in listing data: jobs, freelancers and the business dashboard.

pub mod dashboard;
pub mod detail;
pub mod search;

use crate::models::{Freelancer, Job, JobType};

pub const JOBS: &[Job] = &[
    Job {
        id: "1",
        title: "Web Developer",
        company: "TechSolutions Inc.",
        location: "New York, NY",
        job_type: JobType::FullTime,
        salary: "$60,000 - $80,000",
        description: "We are looking for an experienced web developer to join our team and help us build amazing websites and applications for our clients.",
        posted: "2 days ago",
        deadline: "July 15, 2023",
        skills: &["JavaScript", "React", "Node.js", "HTML/CSS"],
    },
    Job {
        id: "2",
        title: "Graphic Designer",
        company: "Creative Studios",
        location: "Los Angeles, CA",
        job_type: JobType::PartTime,
        salary: "$25 - $35/hr",
        description: "Join our creative team to design stunning visual assets for our marketing campaigns and client projects.",
        posted: "3 days ago",
        deadline: "July 20, 2023",
        skills: &["Photoshop", "Illustrator", "InDesign", "UI/UX"],
    },
    Job {
        id: "3",
        title: "Marketing Specialist",
        company: "Growth Partners",
        location: "Chicago, IL (Remote)",
        job_type: JobType::Contract,
        salary: "$40 - $50/hr",
        description: "Help us develop and execute marketing strategies that drive growth and engagement for our business clients.",
        posted: "1 week ago",
        deadline: "July 25, 2023",
        skills: &["Social Media", "SEO", "Content Marketing", "Analytics"],
    },
    Job {
        id: "4",
        title: "Content Writer",
        company: "WordCraft Publishing",
        location: "Remote",
        job_type: JobType::Freelance,
        salary: "$30 - $40/hr",
        description: "Looking for a creative content writer who can produce high-quality blog posts, articles, and web content for our diverse client base.",
        posted: "1 week ago",
        deadline: "August 1, 2023",
        skills: &["Content Writing", "SEO", "Copywriting", "Research"],
    },
    Job {
        id: "5",
        title: "Mobile App Developer",
        company: "AppNova Technologies",
        location: "Austin, TX",
        job_type: JobType::FullTime,
        salary: "$70,000 - $90,000",
        description: "Join our development team to create cutting-edge mobile applications for iOS and Android platforms.",
        posted: "4 days ago",
        deadline: "July 30, 2023",
        skills: &["Swift", "Kotlin", "Flutter", "React Native", "Firebase"],
    },
    Job {
        id: "6",
        title: "Social Media Manager",
        company: "Digital Connect",
        location: "Miami, FL",
        job_type: JobType::PartTime,
        salary: "$20 - $30/hr",
        description: "We're seeking a social media expert to manage and grow our clients' presence across multiple social platforms.",
        posted: "5 days ago",
        deadline: "July 22, 2023",
        skills: &["Social Media", "Content Creation", "Analytics", "Campaign Management"],
    },
];

pub const FREELANCERS: &[Freelancer] = &[
    Freelancer {
        id: "1",
        name: "Sarah Johnson",
        avatar: "https://randomuser.me/api/portraits/women/12.jpg",
        title: "Full Stack Developer",
        rating: 4.9,
        location: "Boston, MA",
        hourly_rate: "45",
        description: "Experienced full-stack developer with expertise in React, Node.js, and MongoDB. I've helped over 50 clients build scalable web applications.",
        skills: &["JavaScript", "React", "Node.js", "MongoDB", "TypeScript"],
        total_jobs: 68,
        total_hours: 1240,
    },
    Freelancer {
        id: "2",
        name: "Michael Chen",
        avatar: "https://randomuser.me/api/portraits/men/22.jpg",
        title: "UI/UX Designer",
        rating: 4.8,
        location: "San Francisco, CA",
        hourly_rate: "55",
        description: "Award-winning UI/UX designer with a passion for creating intuitive and beautiful digital experiences.",
        skills: &["Figma", "Adobe XD", "UI Design", "User Research", "Wireframing"],
        total_jobs: 42,
        total_hours: 890,
    },
    Freelancer {
        id: "3",
        name: "Jessica Williams",
        avatar: "https://randomuser.me/api/portraits/women/32.jpg",
        title: "Content Writer & SEO Expert",
        rating: 4.7,
        location: "Austin, TX",
        hourly_rate: "35",
        description: "I help businesses increase organic traffic through high-quality content and SEO optimization strategies.",
        skills: &["Content Writing", "SEO", "Copywriting", "Blog Posts", "Technical Writing"],
        total_jobs: 53,
        total_hours: 1120,
    },
    Freelancer {
        id: "4",
        name: "David Rodriguez",
        avatar: "https://randomuser.me/api/portraits/men/42.jpg",
        title: "Mobile App Developer",
        rating: 4.6,
        location: "Chicago, IL",
        hourly_rate: "60",
        description: "Specialized in creating native iOS and Android applications that deliver exceptional user experiences and performance.",
        skills: &["Swift", "Kotlin", "Flutter", "React Native", "Mobile UI"],
        total_jobs: 37,
        total_hours: 980,
    },
    Freelancer {
        id: "5",
        name: "Emily Thompson",
        avatar: "https://randomuser.me/api/portraits/women/45.jpg",
        title: "Graphic Designer",
        rating: 4.9,
        location: "New York, NY",
        hourly_rate: "40",
        description: "Creative graphic designer with a keen eye for detail and a passion for creating eye-catching visuals for both print and digital media.",
        skills: &["Adobe Photoshop", "Illustrator", "InDesign", "Brand Identity", "Typography"],
        total_jobs: 76,
        total_hours: 1580,
    },
    Freelancer {
        id: "6",
        name: "Jason Lee",
        avatar: "https://randomuser.me/api/portraits/men/52.jpg",
        title: "Digital Marketing Specialist",
        rating: 4.7,
        location: "Miami, FL",
        hourly_rate: "50",
        description: "Results-driven digital marketer specializing in PPC campaigns, social media marketing, and conversion optimization.",
        skills: &["Google Ads", "Facebook Ads", "SEO", "Analytics", "Content Strategy"],
        total_jobs: 58,
        total_hours: 1420,
    },
];

/// Jobs shown on the home screen
pub fn featured_jobs() -> &'static [Job] {
    &JOBS[..3]
}

/// Freelancers shown on the home screen
pub fn top_freelancers() -> &'static [Freelancer] {
    &FREELANCERS[..3]
}
