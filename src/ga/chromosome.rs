//! Tour chromosome for the genetic algorithm.

/// A permutation of stop indices with its fitness.
///
/// Fitness is `1 / (cost + 1)`, so higher fitness = shorter path. A freshly
/// created chromosome has fitness 0 until evaluated.
///
/// # Examples
///
/// ```
/// use u_tourplan::ga::TourChromosome;
///
/// let tour = TourChromosome::new(vec![2, 0, 1]);
/// assert_eq!(tour.order(), &[2, 0, 1]);
/// assert_eq!(tour.fitness(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TourChromosome {
    order: Vec<usize>,
    fitness: f64,
}

impl TourChromosome {
    /// Creates an unevaluated chromosome.
    pub fn new(order: Vec<usize>) -> Self {
        Self {
            order,
            fitness: 0.0,
        }
    }

    /// Returns the stop order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Returns a mutable reference to the stop order.
    pub fn order_mut(&mut self) -> &mut Vec<usize> {
        &mut self.order
    }

    /// Consumes the chromosome, returning its order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    pub fn set_fitness(&mut self, fitness: f64) {
        self.fitness = fitness;
    }
}
