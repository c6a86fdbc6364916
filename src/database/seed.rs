//! Built-in records used when a slot has never been written.

use crate::database::user::password_hash;
use crate::models::doctor::Doctor;
use crate::models::service::Service;
use crate::models::testimonial::Testimonial;
use crate::models::user::User;
use std::sync::LazyLock;

pub const ADMIN_EMAIL: &str = "admin@smile.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const PATIENT_EMAIL: &str = "user@example.com";
pub const PATIENT_PASSWORD: &str = "user123";

const FEMALE_PORTRAIT: &str = "https://images.unsplash.com/photo-1565090567208-c8038cfcf6cd?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const MALE_PORTRAIT: &str = "https://images.unsplash.com/photo-1758205308181-d52b41e00cef?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";
const MALE_DOCTOR_PORTRAIT: &str = "https://images.unsplash.com/photo-1685022036245-380a447e03bf?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080";

// Hashed once per process; Argon2 is too slow to rerun for every fresh store.
static ADMIN_HASH: LazyLock<String> = LazyLock::new(|| password_hash(ADMIN_PASSWORD).expect("failed to hash seed admin password"));
static PATIENT_HASH: LazyLock<String> = LazyLock::new(|| password_hash(PATIENT_PASSWORD).expect("failed to hash seed patient password"));

pub fn users() -> Vec<User> {
    vec![
        User {
            id: "admin".to_string(),
            name: "Admin".to_string(),
            last_name: "Sistema".to_string(),
            dni: "00000000".to_string(),
            email: ADMIN_EMAIL.to_string(),
            password: ADMIN_HASH.clone(),
            is_admin: true,
            ..User::default()
        },
        User {
            id: "user1".to_string(),
            name: "Juan".to_string(),
            last_name: "Pérez".to_string(),
            dni: "12345678".to_string(),
            email: PATIENT_EMAIL.to_string(),
            password: PATIENT_HASH.clone(),
            is_admin: false,
            ..User::default()
        },
    ]
}

fn doctor(id: &str, name: &str, specialty: &str, description: &str, image: &str) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialty: specialty.to_string(),
        description: description.to_string(),
        image: image.to_string(),
    }
}

pub fn doctors() -> Vec<Doctor> {
    vec![
        doctor(
            "1",
            "Dra. María González",
            "Ortodoncia",
            "Especialista en ortodoncia con 12 años de experiencia. Certificada por la Asociación Americana de Ortodoncistas.",
            FEMALE_PORTRAIT,
        ),
        doctor(
            "2",
            "Dr. Carlos Rodríguez",
            "Implantología",
            "15 años de experiencia en implantes dentales. Formación internacional en cirugía maxilofacial.",
            MALE_PORTRAIT,
        ),
        doctor(
            "3",
            "Dra. Ana Martínez",
            "Estética Dental",
            "Especialista en blanqueamiento y carillas. 10 años transformando sonrisas con técnicas avanzadas.",
            FEMALE_PORTRAIT,
        ),
        doctor(
            "4",
            "Dr. Luis Pérez",
            "Odontología General",
            "Odontólogo general con enfoque en odontología preventiva. 8 años de experiencia clínica.",
            MALE_PORTRAIT,
        ),
        doctor(
            "5",
            "Dra. Patricia Silva",
            "Endodoncia",
            "Experta en tratamientos de conducto con técnicas mínimamente invasivas. 9 años de experiencia.",
            FEMALE_PORTRAIT,
        ),
        doctor(
            "6",
            "Dr. Roberto Fernández",
            "Periodoncia",
            "Especialista en salud de encías y tratamientos periodontales. 11 años cuidando la base de tu sonrisa.",
            MALE_DOCTOR_PORTRAIT,
        ),
    ]
}

fn service(id: &str, name: &str, description: &str, icon: &str) -> Service {
    Service {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        image: None,
    }
}

pub fn services() -> Vec<Service> {
    vec![
        service(
            "1",
            "Limpieza Dental",
            "Limpieza profunda profesional para mantener tus dientes saludables y prevenir enfermedades periodontales.",
            "sparkles",
        ),
        service(
            "2",
            "Ortodoncia",
            "Corrección de la posición de los dientes con brackets tradicionales o invisibles para una sonrisa perfecta.",
            "smile",
        ),
        service(
            "3",
            "Blanqueamiento",
            "Tratamiento de blanqueamiento dental profesional para una sonrisa más brillante y blanca.",
            "sparkles",
        ),
        service("4", "Implantes", "Reemplazo de dientes perdidos con implantes de titanio de última generación.", "shield"),
        service("5", "Endodoncia", "Tratamiento de conductos radiculares para salvar dientes dañados o infectados.", "shield"),
        service(
            "6",
            "Cirugía Maxilofacial",
            "Procedimientos quirúrgicos especializados para correcciones faciales y dentales complejas.",
            "scissors",
        ),
    ]
}

fn approved(id: &str, name: &str, comment: &str) -> Testimonial {
    Testimonial {
        id: id.to_string(),
        name: name.to_string(),
        rating: 5,
        comment: comment.to_string(),
        approved: true,
    }
}

pub fn testimonials() -> Vec<Testimonial> {
    vec![
        approved(
            "1",
            "Laura Sánchez",
            "Excelente atención y profesionalismo. El equipo de Smile transformó mi sonrisa completamente. ¡Altamente recomendados!",
        ),
        approved(
            "2",
            "Pedro Jiménez",
            "La mejor clínica dental de la ciudad. Instalaciones modernas, doctores muy capacitados y un trato excepcional.",
        ),
        approved(
            "3",
            "Carmen López",
            "Tenía mucho miedo al dentista, pero el equipo de Smile me hizo sentir muy cómoda. Resultados increíbles en mi tratamiento de ortodoncia.",
        ),
        approved(
            "4",
            "Miguel Torres",
            "Me realizaron un implante dental y quedé muy satisfecho. El proceso fue rápido, sin dolor y el resultado es perfecto.",
        ),
        approved(
            "5",
            "Sofía Ramírez",
            "El blanqueamiento dental que me hicieron superó mis expectativas. Mi sonrisa ahora es radiante. ¡Gracias Smile!",
        ),
    ]
}
