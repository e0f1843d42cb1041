//! Datos de demostración
//!
//! Un admin, tres clientes, siete conductores (cinco aprobados, dos pendientes),
//! cuatro reservas y sus pagos/ratings. Contraseñas: `admin123`, `customer123`,
//! `driver123`.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::database::Fixtures;
use crate::models::driver::DocumentRecord;
use crate::models::{
    Account, Booking, BookingStatus, BookingType, Driver, DriverDocuments, Notification,
    NotificationType, Payment, PaymentStatus, Rating, Role, ValidationStatus,
};
use crate::utils::errors::{AppError, AppResult};

fn at(timestamp: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(timestamp)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| AppError::Internal(format!("invalid fixture timestamp {}: {}", timestamp, e)))
}

fn verified_documents(suffix: &str) -> DriverDocuments {
    DriverDocuments {
        license: DocumentRecord::verified(&format!("license_{}.pdf", suffix)),
        insurance: DocumentRecord::verified(&format!("insurance_{}.pdf", suffix)),
        background_check: DocumentRecord::verified(&format!("bgcheck_{}.pdf", suffix)),
    }
}

fn uploaded(name: &str) -> DocumentRecord {
    DocumentRecord {
        uploaded: true,
        verified: false,
        name: Some(name.to_string()),
    }
}

struct SeedDriver {
    n: u32,
    name: &'static str,
    email: &'static str,
    vehicle_type: &'static str,
    vehicle_model: &'static str,
    license_plate: &'static str,
    experience: i32,
    hourly_rate: i64,
    daily_rate: i64,
    rating: f64,
    total_trips: u32,
    total_earnings: i64,
    location: &'static str,
    lat: f64,
    lng: f64,
    available: bool,
    status: ValidationStatus,
    documents: DriverDocuments,
    bio: &'static str,
    created_at: &'static str,
}

impl SeedDriver {
    fn build(self, password_hash: &str) -> AppResult<Driver> {
        let base = Driver::new(self.name.to_string(), self.email.to_string(), password_hash.to_string());
        Ok(Driver {
            id: format!("driver-{:03}", self.n),
            user_id: format!("driver-user-{:03}", self.n),
            phone: format!("+1-555-02{:02}", self.n),
            vehicle_type: self.vehicle_type.to_string(),
            vehicle_model: self.vehicle_model.to_string(),
            license_plate: self.license_plate.to_string(),
            experience: self.experience,
            hourly_rate: Decimal::from(self.hourly_rate),
            daily_rate: Decimal::from(self.daily_rate),
            rating: self.rating,
            total_trips: self.total_trips,
            total_earnings: Decimal::from(self.total_earnings),
            location: self.location.to_string(),
            lat: self.lat,
            lng: self.lng,
            available: self.available,
            validation_status: self.status,
            documents: self.documents,
            bio: self.bio.to_string(),
            created_at: at(self.created_at)?,
            ..base
        })
    }
}

fn account(
    id: &str,
    name: &str,
    email: &str,
    role: Role,
    phone: &str,
    password_hash: &str,
    created_at: &str,
) -> AppResult<Account> {
    Ok(Account {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        role,
        phone: phone.to_string(),
        avatar: None,
        created_at: at(created_at)?,
        blocked: false,
    })
}

#[allow(clippy::too_many_arguments)]
fn booking(
    n: u32,
    customer: (&str, &str),
    driver: (&str, &str),
    booking_type: BookingType,
    duration: u32,
    hourly_rate: i64,
    total_amount: i64,
    status: BookingStatus,
    location: &str,
    window: (&str, &str),
    created_at: &str,
    rated: bool,
) -> AppResult<Booking> {
    Ok(Booking {
        id: format!("booking-{:03}", n),
        customer_id: customer.0.to_string(),
        customer_name: customer.1.to_string(),
        driver_id: driver.0.to_string(),
        driver_name: driver.1.to_string(),
        booking_type,
        duration,
        hourly_rate: Decimal::from(hourly_rate),
        total_amount: Decimal::from(total_amount),
        status,
        location: location.to_string(),
        start_time: at(window.0)?,
        end_time: at(window.1)?,
        created_at: at(created_at)?,
        rated,
    })
}

pub fn fixtures(bcrypt_cost: u32) -> AppResult<Fixtures> {
    let admin_hash = bcrypt::hash("admin123", bcrypt_cost)?;
    let customer_hash = bcrypt::hash("customer123", bcrypt_cost)?;
    let driver_hash = bcrypt::hash("driver123", bcrypt_cost)?;

    let accounts = vec![
        account("admin-001", "Admin User", "admin@useme.com", Role::Admin, "+1-555-0100", &admin_hash, "2025-01-01T00:00:00Z")?,
        account("customer-001", "Sarah Johnson", "sarah@example.com", Role::Customer, "+1-555-0101", &customer_hash, "2025-06-15T10:00:00Z")?,
        account("customer-002", "Michael Chen", "michael@example.com", Role::Customer, "+1-555-0102", &customer_hash, "2025-07-20T14:30:00Z")?,
        account("customer-003", "Emily Davis", "emily@example.com", Role::Customer, "+1-555-0103", &customer_hash, "2025-08-05T09:00:00Z")?,
    ];

    let drivers = vec![
        SeedDriver {
            n: 1,
            name: "James Wilson",
            email: "james@example.com",
            vehicle_type: "Sedan",
            vehicle_model: "Toyota Camry 2024",
            license_plate: "ABC-1234",
            experience: 8,
            hourly_rate: 25,
            daily_rate: 180,
            rating: 4.8,
            total_trips: 342,
            total_earnings: 28500,
            location: "New York, NY",
            lat: 40.7128,
            lng: -74.0060,
            available: true,
            status: ValidationStatus::Approved,
            documents: DriverDocuments {
                license: DocumentRecord::verified("drivers_license.pdf"),
                insurance: DocumentRecord::verified("insurance_cert.pdf"),
                background_check: DocumentRecord::verified("bg_check.pdf"),
            },
            bio: "Professional driver with 8 years of experience. Safe, punctual, and courteous. Specialized in city navigation and airport transfers.",
            created_at: "2025-02-01T00:00:00Z",
        },
        SeedDriver {
            n: 2,
            name: "Maria Garcia",
            email: "maria@example.com",
            vehicle_type: "SUV",
            vehicle_model: "Honda CR-V 2023",
            license_plate: "XYZ-5678",
            experience: 5,
            hourly_rate: 30,
            daily_rate: 220,
            rating: 4.9,
            total_trips: 215,
            total_earnings: 19800,
            location: "Brooklyn, NY",
            lat: 40.6782,
            lng: -73.9442,
            available: true,
            status: ValidationStatus::Approved,
            documents: verified_documents("mg"),
            bio: "Experienced SUV driver, perfect for family trips and group outings. 5+ years of professional driving with a spotless record.",
            created_at: "2025-03-15T00:00:00Z",
        },
        SeedDriver {
            n: 3,
            name: "David Kim",
            email: "david@example.com",
            vehicle_type: "Luxury",
            vehicle_model: "Mercedes-Benz S-Class 2024",
            license_plate: "LUX-9012",
            experience: 12,
            hourly_rate: 50,
            daily_rate: 380,
            rating: 4.95,
            total_trips: 520,
            total_earnings: 68000,
            location: "Manhattan, NY",
            lat: 40.7831,
            lng: -73.9712,
            available: true,
            status: ValidationStatus::Approved,
            documents: verified_documents("dk"),
            bio: "Premium luxury driver with 12 years of experience. Executive transportation specialist. Discrete, professional, and always on time.",
            created_at: "2025-01-10T00:00:00Z",
        },
        SeedDriver {
            n: 4,
            name: "Aaliya Patel",
            email: "aaliya@example.com",
            vehicle_type: "Sedan",
            vehicle_model: "Honda Accord 2023",
            license_plate: "DEF-3456",
            experience: 3,
            hourly_rate: 22,
            daily_rate: 160,
            rating: 4.6,
            total_trips: 89,
            total_earnings: 7200,
            location: "Queens, NY",
            lat: 40.7282,
            lng: -73.7949,
            available: true,
            status: ValidationStatus::Approved,
            documents: verified_documents("ap"),
            bio: "Friendly and reliable driver. Great for daily commutes and errands. Always ensures a comfortable ride.",
            created_at: "2025-05-20T00:00:00Z",
        },
        SeedDriver {
            n: 5,
            name: "Robert Thompson",
            email: "robert@example.com",
            vehicle_type: "Van",
            vehicle_model: "Ford Transit 2023",
            license_plate: "VAN-7890",
            experience: 10,
            hourly_rate: 35,
            daily_rate: 260,
            rating: 4.7,
            total_trips: 178,
            total_earnings: 22000,
            location: "Bronx, NY",
            lat: 40.8448,
            lng: -73.8648,
            available: false,
            status: ValidationStatus::Approved,
            documents: verified_documents("rt"),
            bio: "Specialized in moving and large group transportation. 10 years of van driving experience. Reliable and efficient.",
            created_at: "2025-04-01T00:00:00Z",
        },
        SeedDriver {
            n: 6,
            name: "Lisa Martinez",
            email: "lisa@example.com",
            vehicle_type: "SUV",
            vehicle_model: "Chevrolet Tahoe 2024",
            license_plate: "SUV-2468",
            experience: 6,
            hourly_rate: 32,
            daily_rate: 240,
            rating: 0.0,
            total_trips: 0,
            total_earnings: 0,
            location: "Staten Island, NY",
            lat: 40.5795,
            lng: -74.1502,
            available: true,
            status: ValidationStatus::Pending,
            documents: DriverDocuments {
                license: uploaded("license_lm.pdf"),
                insurance: uploaded("insurance_lm.pdf"),
                background_check: DocumentRecord::default(),
            },
            bio: "New to the platform! 6 years of driving experience with an impeccable safety record.",
            created_at: "2026-02-10T00:00:00Z",
        },
        SeedDriver {
            n: 7,
            name: "Chris Anderson",
            email: "chris@example.com",
            vehicle_type: "Sedan",
            vehicle_model: "Nissan Altima 2023",
            license_plate: "SED-1357",
            experience: 2,
            hourly_rate: 20,
            daily_rate: 145,
            rating: 0.0,
            total_trips: 0,
            total_earnings: 0,
            location: "Jersey City, NJ",
            lat: 40.7178,
            lng: -74.0431,
            available: true,
            status: ValidationStatus::Pending,
            documents: DriverDocuments {
                license: uploaded("license_ca.pdf"),
                insurance: uploaded("insurance_ca.pdf"),
                background_check: uploaded("bgcheck_ca.pdf"),
            },
            bio: "Eager new driver ready to provide excellent service. 2 years of driving experience.",
            created_at: "2026-02-15T00:00:00Z",
        },
    ]
    .into_iter()
    .map(|seed| seed.build(&driver_hash))
    .collect::<AppResult<Vec<_>>>()?;

    let sarah = ("customer-001", "Sarah Johnson");
    let michael = ("customer-002", "Michael Chen");
    let emily = ("customer-003", "Emily Davis");

    let bookings = vec![
        booking(1, sarah, ("driver-001", "James Wilson"), BookingType::Hourly, 3, 25, 75, BookingStatus::Completed, "New York, NY", ("2026-02-20T09:00:00Z", "2026-02-20T12:00:00Z"), "2026-02-19T15:00:00Z", true)?,
        booking(2, michael, ("driver-003", "David Kim"), BookingType::Daily, 1, 50, 380, BookingStatus::Completed, "Manhattan, NY", ("2026-02-18T08:00:00Z", "2026-02-18T20:00:00Z"), "2026-02-17T20:00:00Z", true)?,
        booking(3, sarah, ("driver-002", "Maria Garcia"), BookingType::Hourly, 5, 30, 150, BookingStatus::Active, "Brooklyn, NY", ("2026-02-22T14:00:00Z", "2026-02-22T19:00:00Z"), "2026-02-21T10:00:00Z", false)?,
        booking(4, emily, ("driver-004", "Aaliya Patel"), BookingType::Hourly, 2, 22, 44, BookingStatus::Pending, "Queens, NY", ("2026-02-23T10:00:00Z", "2026-02-23T12:00:00Z"), "2026-02-22T08:00:00Z", false)?,
    ];

    let ratings = vec![
        Rating {
            id: "rating-001".to_string(),
            booking_id: "booking-001".to_string(),
            from_user_id: "customer-001".to_string(),
            to_driver_id: "driver-001".to_string(),
            rating: 5,
            comment: "Excellent driver! Very professional and punctual. Would definitely book again.".to_string(),
            created_at: at("2026-02-20T13:00:00Z")?,
        },
        Rating {
            id: "rating-002".to_string(),
            booking_id: "booking-002".to_string(),
            from_user_id: "customer-002".to_string(),
            to_driver_id: "driver-003".to_string(),
            rating: 5,
            comment: "Premium experience all the way. David was incredibly professional and the car was immaculate.".to_string(),
            created_at: at("2026-02-18T21:00:00Z")?,
        },
    ];

    let payments = vec![
        Payment {
            id: "payment-001".to_string(),
            booking_id: "booking-001".to_string(),
            customer_id: "customer-001".to_string(),
            driver_id: "driver-001".to_string(),
            amount: Decimal::from(75),
            platform_fee: Decimal::new(750, 2),
            driver_earnings: Decimal::new(6750, 2),
            status: PaymentStatus::Completed,
            method: "card".to_string(),
            created_at: at("2026-02-20T12:05:00Z")?,
        },
        Payment {
            id: "payment-002".to_string(),
            booking_id: "booking-002".to_string(),
            customer_id: "customer-002".to_string(),
            driver_id: "driver-003".to_string(),
            amount: Decimal::from(380),
            platform_fee: Decimal::from(38),
            driver_earnings: Decimal::from(342),
            status: PaymentStatus::Completed,
            method: "card".to_string(),
            created_at: at("2026-02-18T20:10:00Z")?,
        },
    ];

    let notifications = vec![
        Notification {
            read: true,
            created_at: at("2026-02-19T15:00:00Z")?,
            id: "notif-001".to_string(),
            ..Notification::unread(
                "driver-001",
                NotificationType::Booking,
                "New Booking Request",
                "Sarah Johnson has booked you for 3 hours on Feb 20.".to_string(),
            )
        },
        Notification {
            created_at: at("2026-02-22T08:00:00Z")?,
            id: "notif-002".to_string(),
            ..Notification::unread(
                "driver-004",
                NotificationType::Booking,
                "New Booking Request",
                "Emily Davis wants to book you for 2 hours on Feb 23.".to_string(),
            )
        },
    ];

    Ok(Fixtures {
        accounts,
        drivers,
        bookings,
        payments,
        ratings,
        notifications,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_drivers_respect_validation_invariant() {
        let fixtures = fixtures(4).unwrap();
        assert_eq!(fixtures.drivers.len(), 7);
        let approved: Vec<_> = fixtures.drivers.iter().filter(|d| d.is_validated()).map(|d| d.id.as_str()).collect();
        assert_eq!(approved, vec!["driver-001", "driver-002", "driver-003", "driver-004", "driver-005"]);
        assert!(fixtures.drivers.iter().all(|d| d.is_validated() == (d.validation_status == ValidationStatus::Approved)));
    }

    #[test]
    fn test_fixture_payments_follow_fee_split() {
        let fixtures = fixtures(4).unwrap();
        for payment in &fixtures.payments {
            assert_eq!(payment.platform_fee, (payment.amount * Decimal::new(10, 2)).round_dp(2));
            assert_eq!(payment.driver_earnings, payment.amount - payment.platform_fee);
        }
    }

    #[test]
    fn test_fixture_passwords_verify() {
        let fixtures = fixtures(4).unwrap();
        let admin = &fixtures.accounts[0];
        assert_eq!(admin.role, Role::Admin);
        assert!(bcrypt::verify("admin123", &admin.password_hash).unwrap());
    }
}
