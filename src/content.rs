#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Certificates,
    Education,
}

impl Section {
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::About,
        Self::Experience,
        Self::Skills,
        Self::Projects,
        Self::Certificates,
        Self::Education,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Certificates => "certificates",
            Self::Education => "education",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Experience => "Experience",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Certificates => "Certificates",
            Self::Education => "Education",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Hero => "⌂",
            Self::About => "☺",
            Self::Experience => "▤",
            Self::Skills => "⚙",
            Self::Projects => "◈",
            Self::Certificates => "✪",
            Self::Education => "✎",
        }
    }
}

pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub avatar: &'static str,
    pub summary: &'static [&'static str],
}

pub struct Contact {
    pub label: &'static str,
    pub href: &'static str,
    pub glyph: &'static str,
}

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub location: &'static str,
    pub responsibilities: &'static [&'static str],
}

pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub link: Option<&'static str>,
}

pub struct Certificate {
    pub title: &'static str,
    pub link: Option<&'static str>,
}

pub struct Education {
    pub degree: &'static str,
    pub school: &'static str,
    pub period: &'static str,
    pub grade: &'static str,
}

pub struct Resume {
    pub profile: Profile,
    pub contacts: &'static [Contact],
    pub experiences: &'static [Experience],
    pub skills: &'static [&'static str],
    pub projects: &'static [Project],
    pub certificates: &'static [Certificate],
    pub education: &'static [Education],
}

pub static RESUME: Resume = Resume {
    profile: Profile {
        name: "Hammad Ghani",
        headline: "Fullstack Developer (Frontend-Heavy) | JavaScript Enthusiast",
        avatar: "/avatar.svg",
        summary: &[
            "Building and scaling robust web-apps for more than 4+ years of experience as a Full-stack Engineer (Frontend-Heavy) with ReactJS, TypeScript, Angular, NextJS, NodeJS, ExpressJS, and SQL in Agile environments. I have led teams, maintained code quality, ensured productivity, and delivered projects on time.",
            "Based in Karachi, Pakistan, I'm passionate about creating efficient and user-friendly web applications.",
        ],
    },
    contacts: &[
        Contact {
            label: "Email",
            href: "mailto:hammy.pk30@gmail.com",
            glyph: "✉",
        },
        Contact {
            label: "LinkedIn",
            href: "https://www.linkedin.com/in/syed-muhammad-hammad-ghani",
            glyph: "in",
        },
        Contact {
            label: "GitHub",
            href: "https://www.github.com/muhammad-hammad",
            glyph: "⌥",
        },
        Contact {
            label: "Portfolio",
            href: "https://topmate.io/syed_muhammad_hammad_ghani/1253394",
            glyph: "🔗",
        },
    ],
    experiences: &[
        Experience {
            title: "Software Engineer",
            company: "Qavi Technologies",
            period: "10/2021 - Present",
            location: "Hybrid, Karachi",
            responsibilities: &[
                "Built high-end responsive UI web listing pages, improving user accessibility and experience across devices.",
                "Developed a generic Stepper form with Drag and Drop functionality, increasing form completion efficiency.",
                "Designed and implemented a highly dynamic form builder, reducing manual form configurations by 40%.",
                "Migrated Angular 9 to 11, improving application performance and maintaining codebase.",
                "Wrote a script under supervision to sync Active Directory with Azure cloud using LDAP, streamlining user management.",
                "Built an Invoice-Purchase-Order parsing comparator form using Google Document AI under supervision.",
                "Integrated a history logger into an existing file management system, improving traceability of user actions.",
                "Implemented a notification strategy under supervision, enhancing user engagement and alerting system.",
                "Created and implemented a strategy to fetch Outlook mailbox emails, displaying them in a responsive UI listing, optimizing email processing.",
                "Used Framer motion to create interactive buttons with AutoComplete Suggestion box and staggered animations, elevating the user experience.",
            ],
        },
        Experience {
            title: "Junior Software Engineer",
            company: "Digitli",
            period: "08/2021 - 10/2021",
            location: "Onsite, Contract, Karachi",
            responsibilities: &[
                "Developed a cross-platform e-commerce app using Flutter, GetX, and Google Maps API, implementing state management, listing, cart functionalities, and custom UI components.",
            ],
        },
        Experience {
            title: "Junior Frontend Developer",
            company: "Computing Yard",
            period: "01/2021 - 06/2021",
            location: "Remote",
            responsibilities: &[
                "Contributed to a multilingual real estate web app using TypeScript, NextJS, and GraphQL.",
                "Developed utility functions and custom hooks in an agile workflow, ensuring on-time delivery.",
                "Integrated React-i18next for multi-language support and created modular components, including stepper forms and multi-select dropdowns.",
            ],
        },
        Experience {
            title: "Junior Software Developer",
            company: "Freelance (Self-employed)",
            period: "02/2020 - 12/2020",
            location: "Remote",
            responsibilities: &[
                "Collaborated remotely with a Middle Eastern team, leveraging agile methodologies to accelerate task delivery.",
                "Worked on implementing Atomic Design with Lerna and Single SPA, developing dynamic tables and modules with pagination.",
                "Enhanced code quality by creating stories in Storybook and writing test cases using Jest.",
            ],
        },
        Experience {
            title: "React Intern",
            company: "CQ Technologies",
            period: "12/2019 - 01/2020",
            location: "Remote, Contract",
            responsibilities: &[
                "Collaborated on a web application using JavaScript, React, Redux, and PWA technologies.",
                "Created responsive UI through media queries to ensure cross-device compatibility.",
            ],
        },
    ],
    skills: &[
        "ReactJS",
        "NextJS",
        "Angular",
        "JavaScript",
        "TypeScript",
        "NodeJS",
        "ExpressJS",
        "NestJS",
        "MySQL",
        "PostgreSQL",
        "MongoDB",
        "Flutter",
        "Dart",
        "Firebase",
        "GraphQL",
        "Redis",
        "Git",
        "Material UI",
        "Radix UI",
        "AntDesign",
        "Sass",
        "React Native",
        "ShadCN",
        "Storybook",
        "Jest",
        "Github Actions",
        "AWS S3",
        "Open AI",
    ],
    projects: &[
        Project {
            title: "Spotify Playlist Generator using OpenAI and Spotify API",
            description: "Users can search for moods, songs, or artists, and the app uses OpenAI and the Spotify Web API to create a playlist and display details, including song previews.",
            link: Some("https://github.com/Muhammad-Hammad/spotify-playlist-fetcher"),
        },
        Project {
            title: "Campus-Recruitment-System Web-App",
            description: "ReactJS Redux based system handling role-based Authentication, Realtime Database, and Hosting with Firebase.",
            link: Some("https://github.com/Muhammad-Hammad/campus-web-app"),
        },
        Project {
            title: "Expense Tracker Web-App",
            description: "ReactJS based expense tracker web-app deployed with Surge token on GitHub.",
            link: Some("https://github.com/Muhammad-Hammad/expense-tracker-app"),
        },
    ],
    certificates: &[
        Certificate {
            title: "Level Up: Javascript by Emma Bostian.",
            link: Some("https://www.linkedin.com/learning/certificates/c2dd0e25778db65a293ae04da605ff2b639c1e69e1dd30c7ed742fb91434f8b6?trk=share_certificate"),
        },
        Certificate {
            title: "Responsive Web Design Certification by FreeCodeCamp.org",
            link: Some("https://www.freecodecamp.org/certification/smhammad/responsive-web-design"),
        },
        Certificate {
            title: "Introduction to MongoDB (M001: MongoDB Basics)",
            link: Some("https://ti-user-certificates.s3.amazonaws.com/ae62dcd7-abdc-4e90-a570-83eccba49043/628e3a64-6546-51cc-8b2f-cab417cb6a15-syed-muhammad-hammad-ghani-985b2076-307e-5fdf-b21d-37789d967be2-certificate.pdf"),
        },
        Certificate {
            title: "Certified in MS Office (Word, Excel, Powerpoint)",
            link: Some("https://www.credly.com/users/syed-muhammad-hammad-ghani"),
        },
        Certificate {
            title: "React Essentials from Lynda.com.",
            link: None,
        },
        Certificate {
            title: "Web-App Development by Saylani Mass IT Training.",
            link: None,
        },
        Certificate {
            title: "Won an interdepartmental UI development Competition at Dawood University of Engineering and Technology.",
            link: None,
        },
    ],
    education: &[Education {
        degree: "Bachelors of Engineering",
        school: "Dawood University of Engineering and Technology Karachi",
        period: "01/2017 - 12/2020",
        grade: "CGPA 3.23",
    }],
};
