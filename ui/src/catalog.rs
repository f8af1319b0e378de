//! Static content for the home page sections.

use crate::media::MediaItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialty {
    pub id: u32,
    pub name: &'static str,
}

pub const SPECIALTIES: &[Specialty] = &[
    Specialty { id: 1, name: "Cardiac Sciences" },
    Specialty { id: 2, name: "Neuro Sciences" },
    Specialty { id: 3, name: "Orthopedic" },
    Specialty { id: 4, name: "Pediatrics" },
    Specialty { id: 5, name: "Gynecology" },
    Specialty { id: 6, name: "Surgical Services" },
    Specialty { id: 7, name: "Gastroenterology" },
    Specialty { id: 8, name: "Pulmonology" },
    Specialty { id: 9, name: "Urology" },
];

pub const CENTERS_IMAGE: MediaItem = MediaItem {
    id: 100,
    url: "https://images.unsplash.com/photo-1584982751601-97dcc096659c?q=80&w=1672&auto=format&fit=crop",
    alt: "Doctor with holographic medical display",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doctor {
    pub id: u32,
    pub name: &'static str,
    pub specialty: &'static str,
    pub experience: &'static str,
    pub description: &'static str,
    pub photo: MediaItem,
}

pub const DOCTORS: &[Doctor] = &[
    Doctor {
        id: 1,
        name: "Dr. Sarah Johnson",
        specialty: "Cardiology",
        experience: "15+ years experience",
        description: "Specializing in interventional cardiology with expertise in complex cardiac procedures.",
        photo: MediaItem {
            id: 1,
            url: "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?q=80&w=1470&auto=format&fit=crop",
            alt: "Dr. Sarah Johnson",
        },
    },
    Doctor {
        id: 2,
        name: "Dr. Michael Chen",
        specialty: "Neurology",
        experience: "12+ years experience",
        description: "Expert in neurological disorders with advanced training in stroke management and neuro-interventions.",
        photo: MediaItem {
            id: 2,
            url: "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?q=80&w=1470&auto=format&fit=crop",
            alt: "Dr. Michael Chen",
        },
    },
    Doctor {
        id: 3,
        name: "Dr. Emily Rodriguez",
        specialty: "Pediatrics",
        experience: "10+ years experience",
        description: "Dedicated to providing comprehensive care for children with a focus on developmental pediatrics.",
        photo: MediaItem {
            id: 3,
            url: "https://images.unsplash.com/photo-1527613426441-4da17471b66d?q=80&w=1470&auto=format&fit=crop",
            alt: "Dr. Emily Rodriguez",
        },
    },
];

pub const PATIENT_CARE_POINTS: &[&str] = &[
    "Individualized treatment plans",
    "Comprehensive health assessments",
    "Regular follow-up care",
    "Patient education and support",
];

pub const TECHNOLOGY_POINTS: &[&str] = &[
    "Cutting-edge diagnostic equipment",
    "Minimally invasive surgical techniques",
    "Digital health records for seamless care",
    "Telemedicine options for remote consultations",
];
