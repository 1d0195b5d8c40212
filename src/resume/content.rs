//! Resume content
//!
//! The biographical text is fixed; only the footer date changes per build.

/// A titled entry with bullets (degree, project, job)
#[derive(Debug, Clone, Copy)]
pub struct Entry {
    /// Role, degree or project name
    pub title: &'static str,
    /// Company, institution or technology list
    pub organization: &'static str,
    /// Date range or grade line
    pub period: &'static str,
    /// Detail bullets
    pub bullets: &'static [&'static str],
}

/// A bullet with a bold lead-in
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    /// Bold prefix
    pub lead: &'static str,
    /// Remaining text
    pub text: &'static str,
}

/// Everything printed on the resume
#[derive(Debug, Clone, Copy)]
pub struct Resume {
    /// Candidate name
    pub name: &'static str,
    /// Bold line under the name
    pub headline: &'static str,
    /// Contact lines under the headline
    pub contact: &'static [&'static str],
    /// Professional summary paragraph
    pub summary: &'static str,
    /// Education entries
    pub education: &'static [Entry],
    /// Skills table rows
    pub skills: &'static [(&'static str, &'static str)],
    /// Project entries
    pub projects: &'static [Entry],
    /// Work and research experience
    pub experience: &'static [Entry],
    /// Awards and certifications
    pub achievements: &'static [Highlight],
    /// Languages, interests, availability
    pub additional: &'static [Highlight],
}

/// Section headings, in print order
pub const SECTIONS: [&str; 7] = [
    "PROFESSIONAL SUMMARY",
    "EDUCATION",
    "TECHNICAL SKILLS",
    "KEY PROJECTS",
    "EXPERIENCE",
    "ACHIEVEMENTS & CERTIFICATIONS",
    "ADDITIONAL INFORMATION",
];

/// The portfolio owner's resume
pub const RESUME: Resume = Resume {
    name: "ANURAG MISHRA",
    headline: "Data Science Graduate | Machine Learning Enthusiast",
    contact: &[
        "officiallyanurag1@gmail.com | +91 9911210461",
        "linkedin.com/in/anuragmishra02 | github.com/OPanurag",
        "Gurgaon, Haryana, India",
    ],
    summary: "Recent Computer Science graduate from VIT with specialization in Data Science and \
        Machine Learning. Passionate about transforming complex data into actionable insights \
        through statistical analysis, predictive modeling, and data visualization. Proficient in \
        Python, R, SQL, and modern ML frameworks including TensorFlow and PyTorch. Seeking to \
        leverage analytical skills and technical expertise in a challenging data science role to \
        drive business growth and innovation.",
    education: &[Entry {
        title: "Bachelor of Technology in Computer Science & Engineering Specialisation in \
            Artificial Intelligence and Machine Learning",
        organization: "Vellore Institute of Technology (VIT)",
        period: "2021 - 2025 | Percentage: 83.5%",
        bullets: &[
            "Specialized in Data Science and Machine Learning with focus on statistical analysis and LLM",
            "Relevant Coursework: Data Structures, Algorithms, Database Management, Machine Learning, \
                Deep Learning, Big Data Analytics",
            "Final Year Project: Lane Detection System using Deep Learning",
            "Active member of Omdena Contributors Club, Data Science Club and participated in \
                multiple technical workshops",
        ],
    }],
    skills: &[
        ("Programming Languages:", "Python, R, SQL, JavaScript, Java, C++"),
        ("Data Science Libraries:", "Pandas, NumPy, Scikit-learn, TensorFlow, PyTorch, Keras"),
        ("Data Visualization:", "Matplotlib, Seaborn, Plotly, Tableau, Power BI"),
        ("Databases:", "MySQL, PostgreSQL, MongoDB, SQLite"),
        ("Cloud & Tools:", "AWS, Google Cloud Platform, Docker, Git, Jupyter Notebook"),
        (
            "Machine Learning:",
            "Supervised Learning, Unsupervised Learning, Deep Learning, NLP, Computer Vision",
        ),
        (
            "Statistical Analysis:",
            "Hypothesis Testing, Regression Analysis, Time Series Analysis, A/B Testing",
        ),
    ],
    projects: &[
        Entry {
            title: "Customer Churn Prediction Model",
            organization: "Technologies: Python, Scikit-learn, XGBoost, Pandas, Matplotlib",
            period: "Jan 2024 - Mar 2024",
            bullets: &[
                "Developed machine learning model to predict customer churn with 92% accuracy using \
                    ensemble methods",
                "Implemented feature engineering techniques and hyperparameter tuning for optimal performance",
                "Created comprehensive data visualization dashboard for stakeholder presentation",
                "Deployed model using Flask API with real-time prediction capabilities",
            ],
        },
        Entry {
            title: "Social Media Sentiment Analysis System",
            organization: "Technologies: Python, BERT, TensorFlow, Flask, BeautifulSoup",
            period: "Sep 2023 - Dec 2023",
            bullets: &[
                "Built real-time sentiment analysis system for social media posts using BERT and LSTM models",
                "Implemented web scraping techniques to collect and preprocess social media data",
                "Achieved 89% accuracy in sentiment classification across multiple social platforms",
                "Developed RESTful API for integration with external applications",
            ],
        },
        Entry {
            title: "Medical Image Classification using Deep Learning",
            organization: "Technologies: Python, PyTorch, OpenCV, ResNet, CNN",
            period: "May 2023 - Aug 2023",
            bullets: &[
                "Developed CNN-based system for medical image classification with 95% accuracy",
                "Implemented transfer learning using ResNet50 architecture for improved performance",
                "Applied data augmentation techniques to enhance model robustness",
                "Created user-friendly interface for medical professionals to upload and analyze images",
            ],
        },
    ],
    experience: &[
        Entry {
            title: "Data Analytics Intern",
            organization: "Tech Startup (Remote)",
            period: "Jun 2023 - Aug 2023",
            bullets: &[
                "Analyzed customer behavior patterns and market segmentation using statistical methods",
                "Developed automated ETL pipelines processing 50GB+ of customer data daily",
                "Created interactive dashboards for stakeholder reporting using Plotly and Streamlit",
                "Contributed to data-driven decision making that improved customer retention by 15%",
                "Collaborated with cross-functional teams in agile development environment",
            ],
        },
        Entry {
            title: "Data Science Research Assistant",
            organization: "VIT University",
            period: "Jan 2024 - May 2024",
            bullets: &[
                "Led team of 4 students in developing ML solution for predicting academic performance",
                "Analyzed dataset of 10,000+ student records using advanced statistical techniques",
                "Implemented and compared 5 different machine learning algorithms for optimal results",
                "Presented research findings at university symposium and documented methodology in \
                    research paper",
            ],
        },
    ],
    achievements: &[
        Highlight {
            lead: "2nd Place Winner",
            text: "- National Data Science Hackathon (200+ participants) - Developed fraud detection system",
        },
        Highlight {
            lead: "Google Data Analytics Professional Certificate",
            text: "- Completed comprehensive data analytics program",
        },
        Highlight {
            lead: "Deep Learning Specialization",
            text: "- Coursera (Andrew Ng) - 5-course specialization completed",
        },
        Highlight {
            lead: "AWS Machine Learning Specialty",
            text: "- Currently pursuing cloud ML certification",
        },
        Highlight {
            lead: "Kaggle Competitions",
            text: "- Participated in 10+ competitions with top 25% rankings",
        },
        Highlight {
            lead: "Technical Publications",
            text: "- Co-authored 2 research papers on machine learning applications",
        },
    ],
    additional: &[
        Highlight {
            lead: "Languages:",
            text: "English (Fluent), Hindi (Native), Tamil (Conversational)",
        },
        Highlight {
            lead: "Interests:",
            text: "Machine Learning Research, Data Visualization, Open Source Contributions",
        },
        Highlight {
            lead: "Volunteer Work:",
            text: "Data Science Mentor for junior students, Technical Workshop Organizer",
        },
        Highlight {
            lead: "Availability:",
            text: "Immediately available for full-time positions globally",
        },
        Highlight {
            lead: "Work Authorization:",
            text: "Indian citizen, open to relocation and visa sponsorship",
        },
    ],
};
