use rug::Integer;
use thresheld_field::PrimeField;
use thresheld_traits::randomness::GeneralRng;
use thresheld_traits::randomness::SecureRng;

/// A polynomial over a prime field, stored as its coefficients $c_0, \ldots, c_{t-1}$ from the
/// constant term upwards. The constant term carries the secret, so a polynomial exists only for
/// the duration of the split that created it and is never exposed.
pub(crate) struct Polynomial {
    pub(crate) coefficients: Vec<Integer>,
}

impl Polynomial {
    /// Creates a polynomial of degree `threshold - 1` with the given constant term and uniformly
    /// random higher-order coefficients. Draws exactly `threshold - 1` field elements from the
    /// RNG and has no other side effects.
    pub(crate) fn random<R: SecureRng>(
        constant: Integer,
        threshold: usize,
        field: &PrimeField,
        rng: &mut GeneralRng<R>,
    ) -> Polynomial {
        debug_assert!(threshold >= 2);

        let mut coefficients = Vec::with_capacity(threshold);
        coefficients.push(constant);

        for _ in 1..threshold {
            coefficients.push(field.random_element(rng));
        }

        Polynomial { coefficients }
    }

    /// Evaluates the polynomial at `x` with Horner's method, reducing into the field after every
    /// step.
    pub(crate) fn evaluate(&self, x: &Integer, field: &PrimeField) -> Integer {
        let mut value = Integer::new();

        for coefficient in self.coefficients.iter().rev() {
            value = field.add(&field.mul(&value, x), coefficient);
        }

        value
    }
}

#[cfg(test)]
mod tests {
    use crate::polynomial::Polynomial;
    use rand_core::OsRng;
    use rug::Integer;
    use thresheld_field::PrimeField;
    use thresheld_traits::randomness::GeneralRng;

    #[test]
    fn test_evaluate_known_polynomial() {
        // f(x) = 3 + 2x + x^2 over the field of order 13
        let field = PrimeField::new(Integer::from(13)).unwrap();
        let polynomial = Polynomial {
            coefficients: vec![Integer::from(3), Integer::from(2), Integer::from(1)],
        };

        assert_eq!(
            polynomial.evaluate(&Integer::from(0), &field),
            Integer::from(3)
        );
        assert_eq!(
            polynomial.evaluate(&Integer::from(4), &field),
            Integer::from(1)
        );
    }

    #[test]
    fn test_evaluate_reduces_into_field() {
        let field = PrimeField::new(Integer::from(13)).unwrap();
        let polynomial = Polynomial {
            coefficients: vec![Integer::from(12), Integer::from(12)],
        };

        assert_eq!(
            polynomial.evaluate(&Integer::from(12), &field),
            Integer::from(0)
        );
    }

    #[test]
    fn test_random_polynomial_keeps_constant_term() {
        let field = PrimeField::default();
        let mut rng = GeneralRng::new(OsRng);
        let secret = Integer::from(123456789);

        let polynomial = Polynomial::random(secret.clone(), 5, &field, &mut rng);

        assert_eq!(polynomial.coefficients.len(), 5);
        assert_eq!(polynomial.coefficients[0], secret);
        assert_eq!(polynomial.evaluate(&Integer::from(0), &field), secret);

        for coefficient in &polynomial.coefficients {
            assert!(field.contains(coefficient));
        }
    }
}
