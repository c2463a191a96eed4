use serde::Serialize;

/// Image metadata for a showcase entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ImageAsset {
    pub src: &'static str,
    pub alt: &'static str,
    pub width: u32,
    pub height: u32,
}

/// A flagship summer project advertised on the site, with the full topic
/// list the training covers and the discounted enrollment price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProjectShowcase {
    pub title: &'static str,
    pub description: &'static str,
    pub image: ImageAsset,
    pub curriculum: &'static [&'static str],
    pub register_link: &'static str,
    pub original_price: &'static str,
    pub price: &'static str,
    pub project_code: &'static str,
}

const SHOWCASE: [ProjectShowcase; 2] = [
    ProjectShowcase {
        title: "1. Develop Your Own Cloud",
        description: "Develop Serverless Cloud Computing Using Container for Cloud-Native \
                      Applications to simplify development, deployment & management",
        image: ImageAsset {
            src: "/assets/projects/101.gif",
            alt: "Cloud Computing Project",
            width: 400,
            height: 400,
        },
        curriculum: &[
            "AWS Cloud",
            "AWS Services",
            "AWS Lambda",
            "Amazon API Gateway",
            "AWS Step Functions",
            "Amazon DynamoDB",
            "Amazon S3",
            "Amazon SQS",
            "Amazon SNS",
            "AWS Serverless services",
            "AWS Ec2",
            "AWS RDS",
            "AWS Route 53",
            "AWS Cloud Front",
            "RHELv9 (Red Hat Enterprise Linux)",
            "Networking",
            "Virtualization",
            "Python",
            "Python TUI",
            "Docker",
            "Podman",
            "Web Development Framework",
            "Django/Flask/Nodejs",
            "RestAPI",
            "Flutter/React Native",
            "Mysql",
            "MongoDB",
            "Git",
            "Github",
        ],
        register_link: "https://example.com/cloud-project",
        original_price: "70000",
        price: "5000",
        project_code: "LW-PSI-SP-100",
    },
    ProjectShowcase {
        title: "2. Next Generation DevOps With Cloud Computing",
        description: "Develop High-End Next Generation End to End DevOps Pipeline Managed \
                      Service in High Performance Cloud Computing Platform.",
        image: ImageAsset {
            src: "/assets/projects/102.gif",
            alt: "DevOps Project",
            width: 400,
            height: 400,
        },
        curriculum: &[
            "Pipeline as Code",
            "Jenkins",
            "Ansible",
            "Terraform",
            "AWS Cloud",
            "RHELv9",
            "Virtualization",
            "Storage",
            "Networking",
            "Python",
            "Javascript",
            "Dart",
            "Git",
            "Github",
            "Docker",
            "Podman",
            "Openshift",
            "Kubernetes",
            "Web Development",
            "Django/Flask/Nodejs",
            "RestAPI",
            "Flutter/React Native",
            "Mysql",
            "MongoDB",
            "Python TUI",
            "Configuration Management",
        ],
        register_link: "https://example.com/devops-project",
        original_price: "70000",
        price: "5000",
        project_code: "LW-PSI-SP-101",
    },
];

/// Catalog consumed by the projects page, in display order.
pub fn showcase() -> &'static [ProjectShowcase] {
    &SHOWCASE
}
